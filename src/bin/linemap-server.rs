#![allow(clippy::result_large_err)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use clap::Parser;

use linemap::remote::{CompareResponse, MessageType, SummaryView};
use linemap::storage::Storage;

#[path = "linemap_server/types.rs"]
mod types;
use self::types::*;
#[path = "linemap_server/http_error.rs"]
mod http_error;
use self::http_error::*;
#[path = "linemap_server/handlers_system.rs"]
mod handlers_system;
use self::handlers_system::*;
#[path = "linemap_server/handlers_compare.rs"]
mod handlers_compare;
use self::handlers_compare::*;
#[path = "linemap_server/handlers_reports.rs"]
mod handlers_reports;
use self::handlers_reports::*;
#[path = "linemap_server/routes.rs"]
mod routes;
use self::routes::*;
#[path = "linemap_server/runtime.rs"]
mod runtime;

#[tokio::main]
async fn main() {
    if let Err(err) = runtime::run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
