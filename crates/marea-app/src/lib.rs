// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod cells;
pub mod keys;
pub mod model;
pub mod sort;
pub mod state;

pub use cells::*;
pub use keys::*;
pub use model::*;
pub use sort::*;
pub use state::*;
