pub use std::{
    collections::{HashMap, HashSet},
    env, fmt,
    io::Write,
    sync::Arc,
};

pub use tokio::time::{timeout, Duration};

pub use anyhow::{anyhow, Context};
pub use async_trait::async_trait;
pub use derive_new::new;
pub use dotenv::dotenv;
pub use getset::Getters;
pub use log::{debug, error, info, warn};
pub use serde::{de::DeserializeOwned, Deserialize, Serialize};
pub use serde_json::{json, Map, Value};
