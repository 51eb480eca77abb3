//! The set of tools the service offers, loaded once and shared immutably.

use serde::{Deserialize, Serialize};

use super::advice::{DeicingTable, StainTable};
use super::foundation::{DomainError, ErrorCode, ValidationError};
use super::pricing::{DeclutteringTable, WinterServiceTable};
use super::schema::AssessmentSchema;

pub const DECLUTTERING_ID: &str = "decluttering";
pub const WINTER_SERVICE_ID: &str = "winter-service";
pub const DEICING_ID: &str = "deicing";
pub const STAIN_REMOVAL_ID: &str = "stain-removal";

/// Which estimator variant a tool uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
    Assessment,
    PriceRange,
    CostComparison,
    Ranking,
    Lookup,
}

/// Summary of one tool for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub id: String,
    pub title: String,
    pub kind: ToolKind,
}

/// All tool tables. Assessments keep their file order.
#[derive(Debug, Clone)]
pub struct Catalog {
    assessments: Vec<AssessmentSchema>,
    decluttering: DeclutteringTable,
    winter_service: WinterServiceTable,
    deicing: DeicingTable,
    stains: StainTable,
}

impl Catalog {
    /// Builds a catalog, validating every table.
    pub fn new(
        assessments: Vec<AssessmentSchema>,
        decluttering: DeclutteringTable,
        winter_service: WinterServiceTable,
        deicing: DeicingTable,
        stains: StainTable,
    ) -> Result<Self, DomainError> {
        for (i, schema) in assessments.iter().enumerate() {
            if assessments[..i].iter().any(|s| s.id == schema.id) {
                return Err(DomainError::new(
                    ErrorCode::CatalogInvalid,
                    format!("Duplicate assessment '{}'", schema.id),
                ));
            }
            if is_reserved(schema.id.as_str()) {
                return Err(DomainError::new(
                    ErrorCode::CatalogInvalid,
                    format!("Assessment id '{}' is reserved", schema.id),
                ));
            }
            invalid(schema.id.as_str(), schema.validate())?;
        }
        invalid(DECLUTTERING_ID, decluttering.validate())?;
        invalid(WINTER_SERVICE_ID, winter_service.validate())?;
        invalid(DEICING_ID, deicing.validate())?;
        invalid(STAIN_REMOVAL_ID, stains.validate())?;

        Ok(Self {
            assessments,
            decluttering,
            winter_service,
            deicing,
            stains,
        })
    }

    pub fn assessment(&self, id: &str) -> Option<&AssessmentSchema> {
        self.assessments.iter().find(|s| s.id.as_str() == id)
    }

    /// Like [`Catalog::assessment`] but distinguishes unknown ids from
    /// ids that name a non-assessment tool.
    pub fn require_assessment(&self, id: &str) -> Result<&AssessmentSchema, DomainError> {
        if let Some(schema) = self.assessment(id) {
            return Ok(schema);
        }
        let code = if is_reserved(id) {
            ErrorCode::WrongToolKind
        } else {
            ErrorCode::ToolNotFound
        };
        Err(DomainError::new(code, format!("No assessment named '{}'", id)).with_detail("tool", id))
    }

    pub fn assessments(&self) -> &[AssessmentSchema] {
        &self.assessments
    }

    pub fn decluttering(&self) -> &DeclutteringTable {
        &self.decluttering
    }

    pub fn winter_service(&self) -> &WinterServiceTable {
        &self.winter_service
    }

    pub fn deicing(&self) -> &DeicingTable {
        &self.deicing
    }

    pub fn stains(&self) -> &StainTable {
        &self.stains
    }

    /// Descriptors of every tool: assessments first, then calculators.
    pub fn tools(&self) -> Vec<ToolDescriptor> {
        let mut tools: Vec<ToolDescriptor> = self
            .assessments
            .iter()
            .map(|s| ToolDescriptor {
                id: s.id.to_string(),
                title: s.title.clone(),
                kind: ToolKind::Assessment,
            })
            .collect();
        tools.extend([
            descriptor(DECLUTTERING_ID, &self.decluttering.title, ToolKind::PriceRange),
            descriptor(WINTER_SERVICE_ID, &self.winter_service.title, ToolKind::CostComparison),
            descriptor(DEICING_ID, &self.deicing.title, ToolKind::Ranking),
            descriptor(STAIN_REMOVAL_ID, &self.stains.title, ToolKind::Lookup),
        ]);
        tools
    }
}

fn is_reserved(id: &str) -> bool {
    [DECLUTTERING_ID, WINTER_SERVICE_ID, DEICING_ID, STAIN_REMOVAL_ID].contains(&id)
}

fn descriptor(id: &str, title: &str, kind: ToolKind) -> ToolDescriptor {
    ToolDescriptor {
        id: id.to_string(),
        title: title.to_string(),
        kind,
    }
}

fn invalid(tool: &str, result: Result<(), ValidationError>) -> Result<(), DomainError> {
    result.map_err(|e| {
        DomainError::new(ErrorCode::CatalogInvalid, format!("Table '{}' is invalid: {}", tool, e))
            .with_detail("tool", tool)
            .with_detail("field", e.field())
    })
}

