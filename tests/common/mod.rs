//! Shared fixtures: an in-memory transport and ZIP builders

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{Cursor, Write};

use fxnc_fetch::{FetchError, HttpResponse, Result, Transport};
use reqwest::StatusCode;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Serves canned responses by URL; anything unknown is a 404
#[derive(Default)]
pub struct FakeTransport {
    routes: HashMap<String, Route>,
    requests: RefCell<Vec<String>>,
}

enum Route {
    Respond(StatusCode, Vec<u8>),
    Refuse,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.routes
            .insert(url.to_string(), Route::Respond(StatusCode::OK, body.into()));
        self
    }

    pub fn status(mut self, url: &str, status: StatusCode) -> Self {
        self.routes
            .insert(url.to_string(), Route::Respond(status, Vec::new()));
        self
    }

    /// Fail at the transport level, as if the connection were refused
    pub fn refuse(mut self, url: &str) -> Self {
        self.routes.insert(url.to_string(), Route::Refuse);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Transport for FakeTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        self.requests.borrow_mut().push(url.to_string());
        match self.routes.get(url) {
            Some(Route::Respond(status, body)) => Ok(HttpResponse::new(*status, body.clone())),
            Some(Route::Refuse) => Err(FetchError::Network {
                url: url.to_string(),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "connection refused",
                )),
            }),
            None => Ok(HttpResponse::new(StatusCode::NOT_FOUND, Vec::new())),
        }
    }
}

/// In-memory ZIP with the given members, stored uncompressed
pub fn zip_bytes(members: &[(&str, &[u8])]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (name, data) in members {
        zip.start_file(*name, options).unwrap();
        zip.write_all(data).unwrap();
    }
    zip.finish().unwrap().into_inner()
}
