//! Integration tests for the Template Vault HTTP API.
//!
//! These tests exercise the full stack (router, services, repositories)
//! against a real PostgreSQL database. Each test wipes the tables it
//! touches, so they must not share a database with anything else. Set
//! `DATABASE_URL` to a disposable database and run with
//! `cargo test -- --ignored --test-threads=1`.

mod helpers;

mod domain_test;
mod template_test;
