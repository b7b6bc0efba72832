// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod processor_config;

pub mod consts;

pub use processor_config::ProcessorConfig;
