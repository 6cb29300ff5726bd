//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the application,
//! including API endpoints, admission control, and data access. The backend uses Axum
//! as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Admission control and business logic between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations, generic over connection or transaction
//! - **Model Layer** (`model/`) - Domain models, the capacity ledger, and parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, event locks, stats client)
//! - **Startup** (`startup`) - Initialization of database and HTTP clients
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** extracts parameters, converts DTOs to params, calls service
//! 3. **Service** takes the event lock where a ledger is involved, opens a transaction
//!    and applies the business rules
//! 4. **Data** queries database and returns entity models
//! 5. **Service** converts entities to domain models and returns them
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
