pub mod core {
    pub mod config;
    pub mod error;
    pub mod routes;
    pub mod state;
    pub mod tracing_init;
}

pub mod handlers {
    pub mod fallback;
    pub mod health;
    pub mod root;
    pub mod users;
}

pub mod models {
    pub mod api;
    pub mod user;
}

pub mod stores {
    pub mod id_allocator;
    pub mod user_store;
}

pub mod utils {
    pub mod time;
}

pub mod validation {
    pub mod payload;
}
