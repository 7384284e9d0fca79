use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Biomarker {
    #[serde(rename = "hscrp")]
    HsCrp,
    Ldl,
    #[serde(rename = "lpa")]
    LipoproteinA,
}

impl Biomarker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Biomarker::HsCrp => "hscrp",
            Biomarker::Ldl => "ldl",
            Biomarker::LipoproteinA => "lpa",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Biomarker::HsCrp => "hsCRP",
            Biomarker::Ldl => "LDL cholesterol",
            Biomarker::LipoproteinA => "Lipoprotein(a)",
        }
    }

    /// hsCRP follows the source study's mg/L convention. The original entry
    /// form labelled the same field "mg/dL" against these breakpoints; set
    /// `[units] hscrp` in the config to reproduce that label.
    pub fn default_unit(&self) -> &'static str {
        match self {
            Biomarker::HsCrp => "mg/L",
            Biomarker::Ldl => "mg/dL",
            Biomarker::LipoproteinA => "mg/dL",
        }
    }

    pub fn ordered() -> &'static [Biomarker; 3] {
        &[Biomarker::HsCrp, Biomarker::Ldl, Biomarker::LipoproteinA]
    }
}

impl std::fmt::Display for Biomarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Readings {
    pub hscrp: f64,
    pub ldl: f64,
    pub lpa: f64,
}

impl Readings {
    pub fn new(hscrp: f64, ldl: f64, lpa: f64) -> Self {
        Self { hscrp, ldl, lpa }
    }

    pub fn get(&self, biomarker: Biomarker) -> f64 {
        match biomarker {
            Biomarker::HsCrp => self.hscrp,
            Biomarker::Ldl => self.ldl,
            Biomarker::LipoproteinA => self.lpa,
        }
    }
}
