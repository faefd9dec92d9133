//! Built-in report profiles
//!
//! A profile is a ready-made [`ReportConfig`] for one family of reports, so
//! the common corpora can be processed without writing a config file.

use std::collections::BTreeMap;

use crate::config::{ExtractionConfig, MarkerSpec, PatternSpec, PreprocessConfig, ReportConfig};
use crate::error::{Error, Result};

/// Registry mapping profile names to their configuration.
///
/// # Example
///
/// ```
/// use report_config::ProfileRegistry;
///
/// let registry = ProfileRegistry::with_builtins();
/// assert_eq!(registry.names(), vec!["surgical", "ultrasound"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: BTreeMap<String, ReportConfig>,
}

impl ProfileRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in profiles registered.
    ///
    /// Currently registers:
    /// - `ultrasound` -> abdominal/pelvic ultrasound reports
    /// - `surgical` -> operative reports
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("ultrasound", ultrasound());
        registry.register("surgical", surgical());
        registry
    }

    /// Register a profile, replacing any previous one of the same name.
    pub fn register(&mut self, name: impl Into<String>, config: ReportConfig) {
        self.profiles.insert(name.into(), config);
    }

    /// Look up a profile by name.
    ///
    /// # Errors
    /// [`Error::UnknownProfile`] listing the registered names.
    pub fn get(&self, name: &str) -> Result<&ReportConfig> {
        self.profiles.get(name).ok_or_else(|| Error::UnknownProfile {
            name: name.to_string(),
            available: self.names().join(", "),
        })
    }

    /// Registered profile names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReportConfig)> {
        self.profiles
            .iter()
            .map(|(name, config)| (name.as_str(), config))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn ultrasound() -> ReportConfig {
    let extraction = ExtractionConfig {
        body_begin_markers: MarkerSpec::from("RENSEIGNEMENT CLINIQUE / CLINICAL INFORMATION"),
        body_end_markers: MarkerSpec::from(vec![
            "Case dictated by",
            "Electronically signed by",
            "Dossier/MRN:",
        ]),
        body_between_start_markers: vec![MarkerSpec::from(
            "Hôpital de Montréal pour Enfants / Montreal Children's Hospital",
        )],
        body_between_end_markers: vec![MarkerSpec::from("Rapport/Report")],
        patterns_to_remove: Vec::new(),
        excluded_files: strings(&["132 U.txt"]),
        case_insensitive: true,
    };

    ReportConfig {
        preprocessing: Some(PreprocessConfig {
            patterns_to_remove: strings(&[
                r"RENSEIGNEMENT CLINIQUE / CLINICAL INFORMATION[:]?",
                r"PROTOCOLE RADIOLOGIQUE / RADIOLOGIST'S REPORT[:]?",
                r"ULTRASOUND\s*(OF|OF THE)?\s*ABDOMEN AND PELVIS( WITH DOPPLER)?",
                r"ULTRASOUND\s*(OF|OF THE)?\s*ABDOMEN( WITH DOPPLER)?",
                r"ABDOMINAL AND PELVIC ULTRASOUND( WITH DOPPLER)?",
                r"FINDINGS[:]?",
                r"(IMPRESSION|[Ii]mpression)s?:?",
            ]),
            lowercase: true,
            split_measure_text: true,
        }),
        ..ReportConfig::new(extraction)
    }
}

fn surgical() -> ReportConfig {
    const LINE_PATTERNS: &[&str] = &[
        "MONTREAL CHILDREN’S HOSPITAL",
        "HOPITAL DE MONTREAL POUR ENFANTS",
        "ESTIMATED BLOOD LOSS",
        "COMPLICATIONS",
        "SPECIMENS",
        "DOCUMENT TRANSCRIT CONSIDERE COMME NON REVISE SI NON SIGNE PAR UN MEDECIN",
        "TRANSCRIBED DOCUMENT CONSIDERED NOT REVIEWED IF NOT SIGNED BY A PHYSICIAN",
        "imprimé a partir de Mediscribe",
        "Site:",
        "Date de l’opération / Operation",
        "date (AAYY-MM-JD):",
        "Anesthésiste / Anesthetist:",
        "Chirurgien / Surgeon:",
        "Assistant(s):",
        "Diagnostic préopératoire:",
        "Pre-operative diagnosis:",
        "Diagnostic postopératoire:",
        "Post-operative diagnosis:",
        "Opération / Operation:",
        "Tissu envoyé en pathologie:",
        "Tissue sent to pathology:",
        "Anesthésie / Anesthesia:",
        "Historique et constatations opératoires / History and operative findings:",
        "Clinical note:",
        "DATE/DATE",
        "OPERATION REPORT / PROTOCOLE OPERATOIRE",
        "User:",
        "INTRAOPERATIVE FINDINGS:",
        "ANESTHESIE / ANAESTHETIC:",
        "RAPPORT / REPORT",
    ];

    // Some operative notes open with "OPERATIVE NOTE" and skip the history.
    ReportConfig::new(ExtractionConfig {
        body_begin_markers: MarkerSpec::from(vec![
            "OPERATIVE PROCEDURE",
            "PROCEDURE",
            "OPERATIVE NOTE",
            "OPERATIVE REPORT",
        ]),
        body_end_markers: MarkerSpec::from(vec!["Dictated", "ESTIMATED BLOOD LOSS"]),
        body_between_start_markers: vec![MarkerSpec::from("User:")],
        body_between_end_markers: vec![MarkerSpec::from("OPERATION REPORT")],
        patterns_to_remove: LINE_PATTERNS
            .iter()
            .map(|pattern| PatternSpec::Literal(pattern.to_string()))
            .collect(),
        excluded_files: Vec::new(),
        case_insensitive: true,
    })
}
