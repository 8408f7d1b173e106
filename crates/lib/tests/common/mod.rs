#![allow(dead_code)]
//! # Common Test Utilities
//!
//! Shared setup and fixtures for the `edital` integration tests.

use edital::{GenerationParameters, TrainingArea, WeeklyHours};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the tracing subscriber once per test binary.
pub fn setup_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A form with every field filled in.
pub fn full_parameters() -> GenerationParameters {
    GenerationParameters {
        unit: "Comarca de Belo Horizonte".to_string(),
        area: TrainingArea::ServicoSocial,
        positions: "02 (duas) vagas + Cadastro de Reserva".to_string(),
        stipend: "R$ 1.250,56".to_string(),
        transport_allowance: "R$ 176,00".to_string(),
        weekly_hours: WeeklyHours::TwentyFive,
        supervisor: "Maria Souza, Assistente Social Judicial".to_string(),
        extra_info: "Prova será online; inscrições em março".to_string(),
    }
}
