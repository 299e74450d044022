//! A6/A7: persistence for driver profiles, lap feedback, presets, and a
//! rolling learning history. Neither module sits in the core pipeline's
//! call graph; a CLI or the style analyser reads/writes them around a
//! `generate`/`generate_and_export` call.

pub mod history;
pub mod profiles_db;
