// src/config/defaults.rs

//! The groups used when no config file is found: a `backend` and a `frontend`
//! subproject, each installed with npm and given a placeholder `.env`.

use super::model::{BootstrapPlan, ConfigSection, TaskGroup};

pub const BACKEND_ENV_LINES: [&str; 2] = [
    "MONGO_URI=<your_mongodb_connection_string>",
    "JWT_SECRET=your_jwt_secret",
];

pub const FRONTEND_ENV_LINES: [&str; 1] = ["REACT_APP_API_URL=http://localhost:5000/api"];

impl BootstrapPlan {
    /// The built-in backend then frontend groups.
    pub fn builtin() -> Self {
        BootstrapPlan::new_unchecked(
            ConfigSection::default(),
            vec![backend_group(), frontend_group()],
        )
    }
}

fn backend_group() -> TaskGroup {
    TaskGroup::new(
        "Backend Setup",
        "backend",
        [
            "npm install".to_string(),
            format!("echo '{}' > .env", BACKEND_ENV_LINES[0]),
            format!("echo '{}' >> .env", BACKEND_ENV_LINES[1]),
        ],
    )
}

fn frontend_group() -> TaskGroup {
    TaskGroup::new(
        "Frontend Setup",
        "frontend",
        [
            "npm install".to_string(),
            format!("echo '{}' > .env", FRONTEND_ENV_LINES[0]),
        ],
    )
}
