//! スプライトシート用の2つのツール (`combine_images`, `preview`) の共通ライブラリ。

pub mod combine;
pub mod domain;
pub mod error;
pub mod logging;
pub mod preview;
