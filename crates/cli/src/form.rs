//! # Form Arguments
//!
//! The command-line counterpart of the parameters form, plus the reference
//! document uploads.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use edital::ingest::{extract_file, ExtractionFailure, ExtractionReport};
use edital::{GenerationParameters, ReferenceContext, TrainingArea, UploadedFile, WeeklyHours};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Training areas offered by the form.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AreaArg {
    Direito,
    Psicologia,
    ServicoSocial,
    Administracao,
    /// Any other area, spelled out with --area-other
    Outra,
}

/// Weekly workloads offered by the form.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoursArg {
    #[value(name = "20")]
    Twenty,
    #[value(name = "25")]
    TwentyFive,
    #[value(name = "30")]
    Thirty,
}

impl From<HoursArg> for WeeklyHours {
    fn from(value: HoursArg) -> Self {
        match value {
            HoursArg::Twenty => WeeklyHours::Twenty,
            HoursArg::TwentyFive => WeeklyHours::TwentyFive,
            HoursArg::Thirty => WeeklyHours::Thirty,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct FormArgs {
    /// YAML or JSON file with the edital parameters; flags below override it
    #[arg(long, value_name = "FILE")]
    params: Option<PathBuf>,
    /// Unit / comarca, e.g. "Comarca de Belo Horizonte"
    #[arg(long)]
    unit: Option<String>,
    /// Training area
    #[arg(long, value_enum)]
    area: Option<AreaArg>,
    /// Training area when --area is "outra"
    #[arg(long, required_if_eq("area", "outra"))]
    area_other: Option<String>,
    /// Number of positions, e.g. "02 (duas) vagas + Cadastro de Reserva"
    #[arg(long)]
    positions: Option<String>,
    /// Stipend amount [default: R$ 1.250,56]
    #[arg(long)]
    stipend: Option<String>,
    /// Transportation allowance [default: R$ 176,00]
    #[arg(long)]
    transport_allowance: Option<String>,
    /// Weekly hours [default: 20]
    #[arg(long, value_enum)]
    weekly_hours: Option<HoursArg>,
    /// Supervisor name and role
    #[arg(long)]
    supervisor: Option<String>,
    /// Other details or specific rules
    #[arg(long)]
    extra_info: Option<String>,
}

impl FormArgs {
    /// Builds the parameters: the `--params` file (or the form defaults),
    /// then every flag that was given.
    pub fn to_parameters(&self) -> Result<GenerationParameters> {
        let mut params = match &self.params {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read parameters file '{}'", path.display()))?;
                serde_yaml::from_str(&content).with_context(|| {
                    format!("Failed to parse parameters file '{}'", path.display())
                })?
            }
            None => GenerationParameters::default(),
        };

        let overrides = [
            (&self.unit, &mut params.unit),
            (&self.positions, &mut params.positions),
            (&self.stipend, &mut params.stipend),
            (&self.transport_allowance, &mut params.transport_allowance),
            (&self.supervisor, &mut params.supervisor),
            (&self.extra_info, &mut params.extra_info),
        ];
        for (flag, field) in overrides {
            if let Some(value) = flag {
                *field = value.clone();
            }
        }

        match self.area {
            Some(AreaArg::Direito) => params.area = TrainingArea::Direito,
            Some(AreaArg::Psicologia) => params.area = TrainingArea::Psicologia,
            Some(AreaArg::ServicoSocial) => params.area = TrainingArea::ServicoSocial,
            Some(AreaArg::Administracao) => params.area = TrainingArea::Administracao,
            Some(AreaArg::Outra) => {
                let name = self.area_other.as_deref().unwrap_or_default();
                params.area = TrainingArea::other(name).map_err(anyhow::Error::msg)?;
            }
            // --area-other alone still names the area.
            None => {
                if let Some(name) = &self.area_other {
                    params.area = TrainingArea::other(name).map_err(anyhow::Error::msg)?;
                }
            }
        }

        if let Some(hours) = self.weekly_hours {
            params.weekly_hours = hours.into();
        }

        Ok(params)
    }
}

#[derive(Args, Debug, Default)]
pub struct ReferenceArgs {
    /// Reference documents (PDF or plain text) that ground the draft
    #[arg(long = "reference", short = 'r', value_name = "FILE", num_args = 1..)]
    pub references: Vec<PathBuf>,
}

impl ReferenceArgs {
    /// Reads and extracts every reference file in order.
    ///
    /// A file that cannot be read or extracted is reported on stderr, in the
    /// order given, and skipped; the rest of the batch is still processed.
    pub async fn load_context(&self) -> ReferenceContext {
        let mut report = ExtractionReport::default();

        for path in &self.references {
            let outcome = match UploadedFile::from_path(path).await {
                Ok(file) => extract_file(&file)
                    .await
                    .map(|text| (file.name, text))
                    .map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            match outcome {
                Ok((name, text)) => report.context.push(name, text),
                Err(message) => {
                    let failure = ExtractionFailure {
                        file_name: display_name(path),
                        message,
                    };
                    warn!("{failure}");
                    eprintln!("{failure}");
                    report.failures.push(failure);
                }
            }
        }

        if !self.references.is_empty() {
            info!(
                loaded = report.loaded(),
                failed = report.failures.len(),
                "Reference documents processed."
            );
            eprintln!("{} file(s) loaded.", report.loaded());
        }
        report.context
    }
}

/// The name a file is reported under: its file name, or the path as given.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
