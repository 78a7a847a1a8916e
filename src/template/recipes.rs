use super::steps::*;
use super::{BodyStyle, TemplateId, TemplateRecipe};
use crate::colour::{colours, Colour};
use crate::font::FontStyle::{self, Bold, Italic, Regular};
use crate::page::Stroke;
use crate::signature::SignatureAnchor;
use crate::units::Pt;

const fn rgb(r: f32, g: f32, b: f32) -> Colour {
    Colour::new_rgb(r, g, b)
}

const fn stroke(colour: Colour, width: f32) -> Stroke {
    Stroke {
        colour,
        width: Pt(width),
    }
}

const fn text(content: Content, style: FontStyle, size: f32, colour: Colour) -> TextStep {
    TextStep::new(content, style, size, colour)
}

const fn literal(text: &'static str) -> Content {
    Content::Literal(text)
}

const fn value(value: Value) -> Content {
    Content::Value(value)
}

/// `offset` points below the top of the page
const fn top(offset: f32) -> VAnchor {
    VAnchor::At(Measure::from_top(offset))
}

/// A full-width filled band across the top of the page
const fn header_band(height: f32, colour: Colour) -> Step {
    Step::Rect {
        x: Measure::fixed(0.0),
        y: Measure::from_top(height),
        width: PAGE_WIDTH,
        height: Measure::fixed(height),
        fill: Some(colour),
        stroke: None,
    }
}

/// A rule from margin to margin
const fn rule(y: VAnchor, colour: Colour, width: f32) -> Step {
    Step::Rule {
        from: MARGIN,
        to: RIGHT_MARGIN,
        y,
        stroke: stroke(colour, width),
    }
}

const DATE_LINE: Content = Content::Pattern("Date: {}", &[Value::CreatedDate]);

pub static CERTIFICATE: TemplateRecipe = TemplateRecipe {
    id: TemplateId::CertificateCompletion,
    steps: &[
        Step::Rect {
            x: Measure::new(0.0, 0.0, 0.5, 0.0),
            y: Measure::new(0.0, 0.0, 0.5, 0.0),
            width: Measure::new(1.0, 0.0, -1.0, 0.0),
            height: Measure::new(0.0, 1.0, -1.0, 0.0),
            fill: None,
            stroke: Some(stroke(colours::GOLD, 3.0)),
        },
        Step::Rect {
            x: Measure::new(0.0, 0.0, 0.5, 8.0),
            y: Measure::new(0.0, 0.0, 0.5, 8.0),
            width: Measure::new(1.0, 0.0, -1.0, -16.0),
            height: Measure::new(0.0, 1.0, -1.0, -16.0),
            fill: None,
            stroke: Some(stroke(colours::PALE_GOLD, 1.0)),
        },
        Step::MoveTo(Measure::from_top(80.0)),
        Step::Text(
            text(literal("CERTIFICATE OF COMPLETION"), Bold, 22.0, rgb(0.25, 0.2, 0.15))
                .centered()
                .advance(15.0),
        ),
        Step::Rule {
            from: Measure::new(0.5, 0.0, 0.0, -100.0),
            to: Measure::new(0.5, 0.0, 0.0, 100.0),
            y: VAnchor::Cursor,
            stroke: stroke(colours::GOLD, 1.5),
        },
        Step::Advance(40.0),
        Step::Text(
            text(literal("This is to certify that"), Italic, 12.0, rgb(0.35, 0.35, 0.4))
                .centered()
                .advance(35.0),
        ),
        Step::Text(
            text(value(Value::Field("recipient_name")), Bold, 28.0, rgb(0.15, 0.15, 0.2))
                .centered()
                .advance(50.0),
        ),
    ],
    body: BodyStyle {
        margin_x: Measure::margin(20.0),
        width: Measure::new(1.0, 0.0, -2.0, -40.0),
        size: 11.0,
        line_height: 20.0,
        centered: true,
    },
    after_body: &[Step::Text(
        text(
            Content::Pattern(
                "Issued by: {}",
                &[Value::FirstOf(&["issuer_name", "company_name"])],
            ),
            Italic,
            11.0,
            rgb(0.4, 0.4, 0.5),
        )
        .centered()
        .at_y(VAnchor::BySignature {
            unsigned: Measure::margin(60.0),
            signed: Measure::above_band(30.0),
        }),
    )],
    signature_anchor: SignatureAnchor::Center,
};

pub static OFFER_LETTER: TemplateRecipe = TemplateRecipe {
    id: TemplateId::OfferLetter,
    steps: &[
        header_band(80.0, colours::NAVY),
        Step::Text(
            text(
                value(Value::FieldOr("company_name", Fallback::Text("Company"))),
                Bold,
                20.0,
                colours::WHITE,
            )
            .centered()
            .at_y(top(50.0)),
        ),
        Step::MoveTo(Measure::from_top(110.0)),
        Step::Text(text(literal("OFFER LETTER"), Bold, 16.0, colours::NAVY).advance(30.0)),
        Step::Text(text(DATE_LINE, Regular, 10.0, colours::MUTED).advance(25.0)),
        Step::Text(
            text(
                Content::Pattern("Dear {},", &[Value::Field("candidate_name")]),
                Regular,
                11.0,
                colours::INK,
            )
            .advance(25.0),
        ),
    ],
    body: BodyStyle::new(11.0, 18.0),
    after_body: &[],
    signature_anchor: SignatureAnchor::Center,
};

pub static EXPERIENCE_LETTER: TemplateRecipe = TemplateRecipe {
    id: TemplateId::ExperienceLetter,
    steps: &[
        Step::Text(
            text(
                value(Value::FieldOr("company_name", Fallback::Text("Organization"))),
                Bold,
                18.0,
                rgb(0.2, 0.25, 0.35),
            )
            .centered()
            .at_y(top(50.0)),
        ),
        rule(top(65.0), rgb(0.3, 0.35, 0.45), 1.0),
        Step::MoveTo(Measure::from_top(100.0)),
        Step::Text(
            text(literal("EXPERIENCE LETTER"), Bold, 14.0, rgb(0.2, 0.25, 0.35)).advance(30.0),
        ),
        Step::Text(text(DATE_LINE, Regular, 10.0, colours::MUTED).advance(25.0)),
        Step::Text(
            text(literal("To Whom It May Concern,"), Italic, 11.0, rgb(0.3, 0.3, 0.35))
                .advance(25.0),
        ),
    ],
    body: BodyStyle::new(11.0, 18.0),
    after_body: &[],
    signature_anchor: SignatureAnchor::Center,
};

pub static BUSINESS_EMAIL_LETTER: TemplateRecipe = TemplateRecipe {
    id: TemplateId::BusinessEmailLetter,
    steps: &[
        Step::Text(
            text(value(Value::CreatedDate), Regular, 10.0, colours::MUTED)
                .right_at(RIGHT_MARGIN)
                .advance(30.0),
        ),
        Step::Text(text(value(Value::Title), Bold, 16.0, colours::SLATE).advance(25.0)),
        Step::Text(
            text(
                Content::Pattern("To: {}", &[Value::Field("audience")]),
                Regular,
                11.0,
                rgb(0.3, 0.32, 0.4),
            )
            .advance(20.0),
        ),
        Step::Text(
            text(
                Content::Pattern("Re: {}", &[Value::Field("topic")]),
                Italic,
                11.0,
                colours::SUBTLE,
            )
            .advance(25.0),
        ),
    ],
    body: BodyStyle::new(11.0, 17.0),
    after_body: &[],
    signature_anchor: SignatureAnchor::Right,
};

pub static BUSINESS_REPORT: TemplateRecipe = TemplateRecipe {
    id: TemplateId::BusinessReport,
    steps: &[
        header_band(70.0, rgb(0.96, 0.95, 0.92)),
        Step::Text(text(value(Value::Title), Bold, 18.0, colours::SLATE).at_y(top(40.0))),
        Step::Text(
            text(
                Content::Join(" • ", &[Value::Field("period"), Value::Field("topic")]),
                Regular,
                10.0,
                rgb(0.4, 0.42, 0.5),
            )
            .at_y(top(58.0)),
        ),
        Step::MoveTo(Measure::from_top(100.0)),
    ],
    body: BodyStyle::new(11.0, 17.0),
    after_body: &[],
    signature_anchor: SignatureAnchor::Right,
};

pub static PROPOSAL_QUOTATION: TemplateRecipe = TemplateRecipe {
    id: TemplateId::ProposalQuotation,
    steps: &[
        header_band(90.0, rgb(0.12, 0.15, 0.25)),
        Step::Text(text(literal("PROPOSAL"), Bold, 24.0, colours::WHITE).at_y(top(45.0))),
        Step::Text(
            text(
                value(Value::FieldOr("project_or_service", Fallback::Title)),
                Regular,
                12.0,
                rgb(0.8, 0.82, 0.88),
            )
            .at_y(top(70.0)),
        ),
        Step::MoveTo(Measure::from_top(120.0)),
        Step::Text(
            text(
                Content::Pattern("Prepared for: {}", &[Value::Field("client_or_stakeholder")]),
                Italic,
                11.0,
                colours::SUBTLE,
            )
            .advance(20.0),
        ),
        Step::Text(text(DATE_LINE, Regular, 10.0, colours::MUTED).advance(30.0)),
    ],
    body: BodyStyle::new(11.0, 17.0),
    after_body: &[],
    signature_anchor: SignatureAnchor::Right,
};

pub static POLICY_SOP_MANUAL: TemplateRecipe = TemplateRecipe {
    id: TemplateId::PolicySopManual,
    steps: &[
        Step::Rect {
            x: MARGIN,
            y: Measure::from_top(80.0),
            width: USABLE_WIDTH,
            height: Measure::fixed(60.0),
            fill: Some(rgb(0.95, 0.95, 0.96)),
            stroke: Some(stroke(rgb(0.8, 0.8, 0.82), 1.0)),
        },
        Step::Text(
            text(
                Content::Upper(Value::FieldOr("doc_type", Fallback::Text("PROCEDURE"))),
                Bold,
                10.0,
                colours::SUBTLE,
            )
            .at_x(Measure::margin(15.0))
            .at_y(top(45.0)),
        ),
        Step::Text(
            text(value(Value::Title), Bold, 14.0, colours::SLATE)
                .at_x(Measure::margin(15.0))
                .at_y(top(62.0)),
        ),
        Step::MoveTo(Measure::from_top(110.0)),
        Step::Text(
            text(
                Content::Pattern("Department: {}", &[Value::Field("department")]),
                Regular,
                10.0,
                colours::MUTED,
            )
            .advance(15.0),
        ),
        Step::Text(
            text(
                Content::Pattern("Effective Date: {}", &[Value::CreatedDate]),
                Regular,
                10.0,
                colours::MUTED,
            )
            .advance(25.0),
        ),
        rule(VAnchor::Cursor, colours::HAIRLINE, 0.5),
        Step::Advance(20.0),
    ],
    body: BodyStyle::new(10.0, 16.0),
    after_body: &[],
    signature_anchor: SignatureAnchor::Right,
};

pub static CONTRACT_SKELETON: TemplateRecipe = TemplateRecipe {
    id: TemplateId::ContractSkeleton,
    steps: &[
        Step::Text(
            text(Content::Upper(Value::Title), Bold, 16.0, rgb(0.15, 0.15, 0.2)).advance(25.0),
        ),
        rule(VAnchor::Cursor, rgb(0.2, 0.2, 0.25), 1.5),
        Step::Advance(25.0),
        Step::Text(
            text(
                Content::Pattern(
                    "Between: {} (\"Party A\") and {} (\"Party B\")",
                    &[Value::Field("party_a"), Value::Field("party_b")],
                ),
                Italic,
                10.0,
                rgb(0.35, 0.35, 0.4),
            )
            .advance(20.0),
        ),
        Step::Text(
            text(
                Content::Pattern("Effective Date: {}", &[Value::Field("effective_date")]),
                Regular,
                10.0,
                colours::MUTED,
            )
            .advance(25.0),
        ),
    ],
    body: BodyStyle::new(10.0, 16.0),
    after_body: &[],
    signature_anchor: SignatureAnchor::Right,
};

pub static FINANCIAL_SUMMARY: TemplateRecipe = TemplateRecipe {
    id: TemplateId::FinancialSummary,
    steps: &[
        header_band(75.0, rgb(0.1, 0.3, 0.2)),
        Step::Text(
            text(literal("FINANCIAL SUMMARY"), Bold, 18.0, colours::WHITE).at_y(top(40.0)),
        ),
        Step::Text(
            text(
                Content::Join(
                    " | ",
                    &[Value::Field("period"), Value::Field("company_or_unit")],
                ),
                Regular,
                11.0,
                rgb(0.85, 0.9, 0.87),
            )
            .at_y(top(58.0)),
        ),
        Step::MoveTo(Measure::from_top(100.0)),
    ],
    body: BodyStyle::new(11.0, 17.0),
    after_body: &[],
    signature_anchor: SignatureAnchor::Right,
};

pub static MARKETING_BRIEF: TemplateRecipe = TemplateRecipe {
    id: TemplateId::MarketingBrief,
    steps: &[
        header_band(85.0, rgb(0.9, 0.35, 0.4)),
        Step::Text(text(literal("CAMPAIGN BRIEF"), Bold, 20.0, colours::WHITE).at_y(top(42.0))),
        Step::Text(
            text(
                value(Value::FieldOr("channel_or_campaign", Fallback::Title)),
                Regular,
                12.0,
                rgb(1.0, 0.9, 0.9),
            )
            .at_y(top(65.0)),
        ),
        Step::MoveTo(Measure::from_top(110.0)),
        Step::Text(
            text(
                Content::Pattern("Target: {}", &[Value::Field("target_segment")]),
                Italic,
                10.0,
                colours::SUBTLE,
            )
            .advance(20.0),
        ),
    ],
    body: BodyStyle::new(11.0, 17.0),
    after_body: &[],
    signature_anchor: SignatureAnchor::Right,
};

/// The default template, also used for unknown template ids
pub static FREEFORM: TemplateRecipe = TemplateRecipe {
    id: TemplateId::CustomFreeform,
    steps: &[
        Step::Text(text(value(Value::Title), Bold, 18.0, colours::SLATE).advance(10.0)),
        rule(VAnchor::Cursor, colours::HAIRLINE, 0.5),
        Step::Advance(25.0),
        Step::Text(text(value(Value::CreatedDate), Regular, 10.0, colours::MUTED).advance(25.0)),
    ],
    body: BodyStyle {
        width: Measure::new(0.95, 0.0, -1.9, 0.0),
        ..BodyStyle::new(11.0, 17.0)
    },
    after_body: &[],
    signature_anchor: SignatureAnchor::Right,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, Typefaces};
    use crate::font::StandardFonts;
    use crate::page::{DrawOp, Page};
    use crate::pagesize;
    use crate::request::RenderRequest;
    use chrono::{TimeZone, Utc};

    const A4: PageGeometry = PageGeometry {
        width: Pt(595.28),
        height: Pt(841.89),
        margin: Pt(50.0),
        signature_band: Pt(0.0),
    };

    fn draw(recipe: &TemplateRecipe, request: &RenderRequest) -> (Vec<DrawOp>, Pt) {
        run(recipe.steps, request)
    }

    fn run(steps: &[Step], request: &RenderRequest) -> (Vec<DrawOp>, Pt) {
        let mut document = Document::new(Page::new(pagesize::A4, None));
        let typefaces = Typefaces::embed(&mut document, &StandardFonts).unwrap();
        let context = StepContext {
            request,
            page: A4,
            typefaces,
        };
        draw_steps(steps, &document, &context, Pt(771.89))
    }

    fn request() -> RenderRequest {
        let created = Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap();
        RenderRequest::new("0123456789", "Services Agreement", "", created)
    }

    fn texts(ops: &[DrawOp]) -> Vec<&str> {
        ops.iter().filter_map(DrawOp::text).collect()
    }

    #[test]
    fn certificate_furniture() {
        let mut request = request();
        request.field("recipient_name", "Ada Lovelace");
        let (ops, cursor) = draw(&CERTIFICATE, &request);

        let DrawOp::Rect(outer) = &ops[0] else {
            panic!("expected the outer border");
        };
        assert_eq!(outer.position.x1, Pt(25.0));
        assert!((outer.position.width().0 - 545.28).abs() < 1e-3);
        assert_eq!(outer.stroke, Some(stroke(colours::GOLD, 3.0)));
        assert_eq!(outer.fill, None);

        assert_eq!(
            texts(&ops),
            vec!["CERTIFICATE OF COMPLETION", "This is to certify that", "Ada Lovelace"]
        );
        // 80 below the top, then 15 + 40 + 35 + 50
        assert!((cursor.0 - (841.89 - 80.0 - 140.0)).abs() < 1e-3);
    }

    #[test]
    fn certificate_without_recipient_keeps_its_place() {
        let (ops, cursor) = draw(&CERTIFICATE, &request());
        assert_eq!(texts(&ops).len(), 2);
        assert!((cursor.0 - (841.89 - 80.0 - 90.0)).abs() < 1e-3);
    }

    #[test]
    fn offer_letter_company_falls_back() {
        let (ops, cursor) = draw(&OFFER_LETTER, &request());
        assert_eq!(texts(&ops), vec!["Company", "OFFER LETTER", "Date: January 5, 2024"]);
        assert!((cursor.0 - (841.89 - 110.0 - 55.0)).abs() < 1e-3);

        let DrawOp::Rect(band) = &ops[0] else {
            panic!("expected the header band");
        };
        assert_eq!(band.position.height(), Pt(80.0));
        assert_eq!(band.fill, Some(colours::NAVY));
    }

    #[test]
    fn certificate_issuer_falls_through_to_the_company() {
        let mut request = request();
        request.field("company_name", "Acme");
        let (ops, _) = run(CERTIFICATE.after_body, &request);
        assert_eq!(texts(&ops), vec!["Issued by: Acme"]);
        let DrawOp::Text(issuer) = &ops[0] else {
            panic!("expected the issuer line");
        };
        assert_eq!(issuer.coords.1, Pt(110.0));

        request.field("issuer_name", "Jane Doe");
        let (ops, _) = run(CERTIFICATE.after_body, &request);
        assert_eq!(texts(&ops), vec!["Issued by: Jane Doe"]);
    }

    #[test]
    fn an_empty_issuer_hides_the_issuer_line() {
        let mut request = request();
        request.field("issuer_name", "").field("company_name", "Acme");
        let (ops, _) = run(CERTIFICATE.after_body, &request);
        assert!(ops.is_empty());
    }

    #[test]
    fn offer_letter_keeps_an_empty_company_name() {
        let mut request = request();
        request.field("company_name", "");
        let (ops, _) = draw(&OFFER_LETTER, &request);
        assert_eq!(texts(&ops), vec!["", "OFFER LETTER", "Date: January 5, 2024"]);

        request.field("candidate_name", "");
        let (ops, cursor) = draw(&OFFER_LETTER, &request);
        assert_eq!(texts(&ops).len(), 3);
        assert!((cursor.0 - (841.89 - 110.0 - 55.0)).abs() < 1e-3);
    }

    #[test]
    fn offer_letter_greets_the_candidate() {
        let mut request = request();
        request
            .field("company_name", "Acme Corp")
            .field("candidate_name", "Sam");
        let (ops, cursor) = draw(&OFFER_LETTER, &request);
        assert_eq!(
            texts(&ops),
            vec!["Acme Corp", "OFFER LETTER", "Date: January 5, 2024", "Dear Sam,"]
        );
        assert!((cursor.0 - (841.89 - 110.0 - 80.0)).abs() < 1e-3);
    }

    #[test]
    fn experience_letter_furniture() {
        let (ops, cursor) = draw(&EXPERIENCE_LETTER, &request());
        assert_eq!(
            texts(&ops),
            vec![
                "Organization",
                "EXPERIENCE LETTER",
                "Date: January 5, 2024",
                "To Whom It May Concern,"
            ]
        );

        let DrawOp::Text(company) = &ops[0] else {
            panic!("expected the organization name");
        };
        assert!((company.coords.1 .0 - (841.89 - 50.0)).abs() < 1e-3);
        assert_eq!(company.font.size, Pt(18.0));
        assert!(company.coords.0 > Pt(50.0) && company.coords.0 < Pt(595.28 / 2.0));

        let DrawOp::Line(rule) = &ops[1] else {
            panic!("expected the rule under the organization name");
        };
        assert!((rule.from.1 .0 - (841.89 - 65.0)).abs() < 1e-3);
        assert_eq!(rule.from.1, rule.to.1);
        assert_eq!(rule.from.0, Pt(50.0));
        assert!((rule.to.0 .0 - 545.28).abs() < 1e-3);
        assert_eq!(rule.stroke, stroke(rgb(0.3, 0.35, 0.45), 1.0));

        let DrawOp::Text(greeting) = &ops[4] else {
            panic!("expected the greeting");
        };
        assert_eq!(greeting.coords.0, Pt(50.0));
        assert!((greeting.coords.1 .0 - (841.89 - 100.0 - 55.0)).abs() < 1e-3);
        // 100 below the top, then 30 + 25 + 25
        assert!((cursor.0 - (841.89 - 180.0)).abs() < 1e-3);

        let mut request = request();
        request.field("company_name", "Initech");
        let (ops, _) = draw(&EXPERIENCE_LETTER, &request);
        assert_eq!(texts(&ops)[0], "Initech");
    }

    #[test]
    fn financial_summary_band() {
        let mut request = request();
        request
            .field("period", "Q4 2024")
            .field("company_or_unit", "Treasury");
        let (ops, cursor) = draw(&FINANCIAL_SUMMARY, &request);
        assert_eq!(texts(&ops), vec!["FINANCIAL SUMMARY", "Q4 2024 | Treasury"]);

        let DrawOp::Rect(band) = &ops[0] else {
            panic!("expected the header band");
        };
        assert_eq!(band.position.x1, Pt(0.0));
        assert!((band.position.width().0 - 595.28).abs() < 1e-3);
        assert!((band.position.height().0 - 75.0).abs() < 1e-3);
        assert!((band.position.y2.0 - 841.89).abs() < 1e-3);
        assert_eq!(band.fill, Some(rgb(0.1, 0.3, 0.2)));
        assert_eq!(band.stroke, None);

        let DrawOp::Text(subline) = &ops[2] else {
            panic!("expected the period line");
        };
        assert_eq!(subline.font.size, Pt(11.0));
        assert!((subline.coords.1 .0 - (841.89 - 58.0)).abs() < 1e-3);
        assert!((cursor.0 - (841.89 - 100.0)).abs() < 1e-3);
    }

    #[test]
    fn financial_summary_subline_skips_missing_parts() {
        let (ops, cursor) = draw(&FINANCIAL_SUMMARY, &request());
        assert_eq!(texts(&ops), vec!["FINANCIAL SUMMARY"]);
        assert_eq!(ops.len(), 2);
        assert!((cursor.0 - (841.89 - 100.0)).abs() < 1e-3);

        let mut request = request();
        request.field("period", "").field("company_or_unit", "Treasury");
        let (ops, _) = draw(&FINANCIAL_SUMMARY, &request);
        assert_eq!(texts(&ops), vec!["FINANCIAL SUMMARY", "Treasury"]);
    }

    #[test]
    fn contract_parties_line() {
        let mut request = request();
        request.field("party_a", "Acme");
        let (ops, _) = draw(&CONTRACT_SKELETON, &request);
        assert_eq!(
            texts(&ops),
            vec!["SERVICES AGREEMENT", "Between: Acme (\"Party A\") and  (\"Party B\")"]
        );
        assert!(matches!(ops[1], DrawOp::Line(_)));
    }

    #[test]
    fn report_meta_line_joins_present_fields() {
        let mut request = request();
        request.field("topic", "Growth");
        let (ops, cursor) = draw(&BUSINESS_REPORT, &request);
        assert_eq!(texts(&ops), vec!["Services Agreement", "Growth"]);
        assert!((cursor.0 - (841.89 - 100.0)).abs() < 1e-3);

        request.field("period", "Q3");
        let (ops, _) = draw(&BUSINESS_REPORT, &request);
        assert_eq!(texts(&ops)[1], "Q3 • Growth");
    }

    #[test]
    fn policy_doc_type_is_upper_cased() {
        let mut request = request();
        request.field("doc_type", "Standard operating procedure");
        let (ops, _) = draw(&POLICY_SOP_MANUAL, &request);
        assert_eq!(
            texts(&ops),
            vec![
                "STANDARD OPERATING PROCEDURE",
                "Services Agreement",
                "Effective Date: January 5, 2024"
            ]
        );
    }

    #[test]
    fn proposal_and_campaign_fall_back_to_the_title() {
        let (ops, _) = draw(&PROPOSAL_QUOTATION, &request());
        assert_eq!(
            texts(&ops),
            vec!["PROPOSAL", "Services Agreement", "Date: January 5, 2024"]
        );
        let (ops, _) = draw(&MARKETING_BRIEF, &request());
        assert_eq!(texts(&ops), vec!["CAMPAIGN BRIEF", "Services Agreement"]);
    }

    #[test]
    fn email_date_is_right_aligned() {
        let (ops, _) = draw(&BUSINESS_EMAIL_LETTER, &request());
        let DrawOp::Text(date) = &ops[0] else {
            panic!("expected the date first");
        };
        assert_eq!(date.text, "January 5, 2024");
        assert!(date.coords.0 > Pt(400.0));
        assert_eq!(date.coords.1, Pt(771.89));
    }

    #[test]
    fn freeform_layout() {
        let (ops, cursor) = draw(&FREEFORM, &request());
        assert_eq!(texts(&ops), vec!["Services Agreement", "January 5, 2024"]);
        let DrawOp::Line(rule) = &ops[1] else {
            panic!("expected a rule under the title");
        };
        assert!((rule.from.1 .0 - 761.89).abs() < 1e-3);
        assert!((cursor.0 - (771.89 - 60.0)).abs() < 1e-3);

        let width = FREEFORM.body.width.resolve(&A4);
        assert!((width.0 - 0.95 * 495.28).abs() < 1e-3);
    }
}
