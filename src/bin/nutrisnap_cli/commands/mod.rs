// ABOUTME: Re-exports command modules for nutrisnap-cli
// ABOUTME: Provides access to the tdee, export, and digest commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod digest;
pub mod export;
pub mod tdee;
