//! Núcleo de cálculo separado em biblioteca para que o CLI e eventuais
//! front-ends futuros usem as mesmas rotinas.

pub mod app;
pub mod config;
pub mod export;
pub mod hull;
pub mod i18n;
pub mod resistance;
pub mod ui_cli;
pub mod units;
