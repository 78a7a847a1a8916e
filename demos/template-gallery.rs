use chrono::Utc;
use doc_layout::render::{render, RenderOptions};
use doc_layout::template::TemplateId;
use doc_layout::{DrawOp, RenderRequest, SignatureDescriptor, SignatureMark, StandardFonts};

fn main() {
    // every template gets the same body, fields and signature
    let body = format!(
        "## Summary\n\n{}\n\n- **first** point\n- second point\n\n{}",
        lipsum::lipsum(60),
        lipsum::lipsum(120)
    );

    for template in TemplateId::ALL {
        let mut request = RenderRequest::new(
            "d3m0c0ffee",
            format!("{template} demo"),
            &body,
            Utc::now(),
        );
        request
            .template(template)
            .field("company_name", "Acme Corporation")
            .field("recipient_name", "Ada Lovelace")
            .field("candidate_name", "Ada Lovelace")
            .field("period", "Q3 2024")
            .field("party_a", "Acme Corporation")
            .field("party_b", "Globex")
            .signed(SignatureDescriptor {
                signer_name: "Charles Babbage".to_string(),
                signer_role: Some("Director".to_string()),
                signed_at: Utc::now(),
                mark: SignatureMark::Typed,
            });

        // lay the page out with the built-in Helvetica metrics on A4 paper
        let output =
            render(&request, &StandardFonts, &RenderOptions::default()).expect("can render");

        // a real application would hand the ops to a PDF or canvas backend; here we just
        // print where everything landed
        println!("== {} ({} ops)", output.file_name, output.ops().len());
        for op in output.ops() {
            match op {
                DrawOp::Text(span) => println!(
                    "  text  ({:>6.1}, {:>6.1}) {:>4}  {}",
                    span.coords.0 .0, span.coords.1 .0, span.font.size.0, span.text
                ),
                DrawOp::Rect(rect) => println!(
                    "  rect  ({:>6.1}, {:>6.1}) {:.1} x {:.1}",
                    rect.position.x1.0,
                    rect.position.y1.0,
                    rect.position.width().0,
                    rect.position.height().0
                ),
                DrawOp::Line(line) => println!(
                    "  line  ({:>6.1}, {:>6.1}) -> ({:.1}, {:.1})",
                    line.from.0 .0, line.from.1 .0, line.to.0 .0, line.to.1 .0
                ),
                DrawOp::Image(image) => println!(
                    "  image ({:>6.1}, {:>6.1})",
                    image.position.x1.0, image.position.y1.0
                ),
            }
        }
    }
}
