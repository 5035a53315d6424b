// src/db/mod.rs

pub mod connection;

pub use connection::{
    create_connection_pool, create_connection_pool_at, get_connection, get_database_path,
    ConnectionPool, PooledConn,
};
