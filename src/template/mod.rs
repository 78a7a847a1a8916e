//! Templates are the visual grammars documents are laid out with.
//!
//! Each template is a [TemplateRecipe]: a static list of [Step]s which draw the page
//! furniture and metadata lines above the body, a [BodyStyle] describing how the body text
//! flows, a list of steps drawn after the body, and where the signature block goes. Recipes
//! are pure data; the [render](crate::render) module is the only thing that interprets them.
//!
//! ```
//! use doc_layout::template::{recipe, TemplateId};
//!
//! assert_eq!(recipe(Some("offer_letter")).id, TemplateId::OfferLetter);
//! assert_eq!(recipe(Some("no_such_template")).id, TemplateId::CustomFreeform);
//! assert_eq!(recipe(None).id, TemplateId::CustomFreeform);
//! ```

mod recipes;
mod steps;

pub use recipes::*;
pub use steps::*;

use crate::document::Typefaces;
use crate::font::FontStyle;
use crate::layout::BodyRegion;
use crate::signature::SignatureAnchor;
use crate::units::Pt;
use derive_more::Display;

/// The built-in templates
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum TemplateId {
    #[display("certificate_completion")]
    CertificateCompletion,
    #[display("offer_letter")]
    OfferLetter,
    #[display("experience_letter")]
    ExperienceLetter,
    #[display("business_email_letter")]
    BusinessEmailLetter,
    #[display("business_report")]
    BusinessReport,
    #[display("proposal_quotation")]
    ProposalQuotation,
    #[display("policy_sop_manual")]
    PolicySopManual,
    #[display("contract_skeleton")]
    ContractSkeleton,
    #[display("financial_summary")]
    FinancialSummary,
    #[display("marketing_brief")]
    MarketingBrief,
    #[display("custom_freeform")]
    CustomFreeform,
}

impl TemplateId {
    pub const ALL: [TemplateId; 11] = [
        TemplateId::CertificateCompletion,
        TemplateId::OfferLetter,
        TemplateId::ExperienceLetter,
        TemplateId::BusinessEmailLetter,
        TemplateId::BusinessReport,
        TemplateId::ProposalQuotation,
        TemplateId::PolicySopManual,
        TemplateId::ContractSkeleton,
        TemplateId::FinancialSummary,
        TemplateId::MarketingBrief,
        TemplateId::CustomFreeform,
    ];

    /// Look up a template by its identifier
    pub fn from_id(id: &str) -> Option<TemplateId> {
        TemplateId::ALL
            .into_iter()
            .find(|template| template.to_string() == id)
    }

    /// The layout recipe for this template
    pub fn recipe(&self) -> &'static TemplateRecipe {
        match self {
            TemplateId::CertificateCompletion => &CERTIFICATE,
            TemplateId::OfferLetter => &OFFER_LETTER,
            TemplateId::ExperienceLetter => &EXPERIENCE_LETTER,
            TemplateId::BusinessEmailLetter => &BUSINESS_EMAIL_LETTER,
            TemplateId::BusinessReport => &BUSINESS_REPORT,
            TemplateId::ProposalQuotation => &PROPOSAL_QUOTATION,
            TemplateId::PolicySopManual => &POLICY_SOP_MANUAL,
            TemplateId::ContractSkeleton => &CONTRACT_SKELETON,
            TemplateId::FinancialSummary => &FINANCIAL_SUMMARY,
            TemplateId::MarketingBrief => &MARKETING_BRIEF,
            TemplateId::CustomFreeform => &FREEFORM,
        }
    }
}

/// Resolve a template identifier to its recipe. Unknown and missing identifiers get the
/// freeform recipe; this never fails.
pub fn recipe(id: Option<&str>) -> &'static TemplateRecipe {
    match id.map(|id| (id, TemplateId::from_id(id))) {
        Some((_, Some(template))) => template.recipe(),
        Some((id, None)) => {
            log::debug!("unknown template {id:?}, using {}", TemplateId::CustomFreeform);
            &FREEFORM
        }
        None => &FREEFORM,
    }
}

/// How body text flows in a template
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BodyStyle {
    pub margin_x: Measure,
    pub width: Measure,
    pub size: f32,
    pub line_height: f32,
    /// Center each line on the page
    pub centered: bool,
}

impl BodyStyle {
    /// Body text at the left margin, as wide as the space between the margins
    pub const fn new(size: f32, line_height: f32) -> BodyStyle {
        BodyStyle {
            margin_x: MARGIN,
            width: USABLE_WIDTH,
            size,
            line_height,
            centered: false,
        }
    }

    /// The region body text flows through on `page`, stopping at `min_y`
    pub fn region(&self, page: &PageGeometry, typefaces: &Typefaces, min_y: Pt) -> BodyRegion {
        BodyRegion {
            margin_x: self.margin_x.resolve(page),
            usable_width: self.width.resolve(page),
            font: typefaces.span(FontStyle::Regular, Pt(self.size)),
            line_height: Pt(self.line_height),
            min_y,
            centered: self.centered,
            page_width: page.width,
            colour: crate::colours::INK,
        }
    }
}

/// A complete description of how one template lays out a page
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TemplateRecipe {
    pub id: TemplateId,
    /// Furniture and metadata, drawn in order before the body
    pub steps: &'static [Step],
    pub body: BodyStyle,
    /// Drawn in order after the body, starting where the body left the cursor
    pub after_body: &'static [Step],
    pub signature_anchor: SignatureAnchor,
}
