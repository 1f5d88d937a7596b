//! alertlabel-api - CRUD over the `alertlabel` table.
//!
//! This crate implements the record store, an HTTP facade over it, and the
//! plumbing (configuration, logging, runtime) needed to serve it.

/*
 * alertlabel-api
 *
 * Copyright (C) 2024  AlphaKeks <alphakeks@dawn.sh>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see https://www.gnu.org/licenses.
 */

#[macro_use]
extern crate derive_more as _;

#[macro_use]
extern crate tracing as _;

#[cfg(test)]
mod testing;

mod signals;

pub mod cli;
pub mod config;
pub mod database;
pub mod http;
pub mod records;
pub mod server;
pub mod telemetry;

pub use config::Config;
pub use server::run;
