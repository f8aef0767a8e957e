#![allow(dead_code)]

pub mod agent;
pub mod qtp_server;
pub mod quoridor;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{anyhow, Context, Error};
        pub type Result<T> = anyhow::Result<T, Error>;

        pub use std::{
            collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
            ops::{Add, Neg, Sub}
        };
    }
}

pub mod prelude {
    pub use super::agent::*;
    pub use super::qtp_server::*;
    pub use super::quoridor::prelude::*;
    pub use super::utils::prelude::*;
}
