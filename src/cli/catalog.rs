use super::ui;
use crate::core::catalog::{CatalogProvider, Review, SampleAssignment};
use anyhow::Result;
use comfy_table::{Cell, CellAlignment};
use futures::future::try_join;

pub async fn run_reviews(catalog: &dyn CatalogProvider) -> Result<()> {
    let reviews = catalog.reviews().await?;
    println!("{}", reviews_table(&reviews));
    Ok(())
}

pub async fn run_samples(catalog: &dyn CatalogProvider) -> Result<()> {
    let samples = catalog.samples().await?;
    println!("{}", samples_table(&samples));
    Ok(())
}

/// Reviews followed by samples, with both lists fetched concurrently.
pub async fn run_overview(catalog: &dyn CatalogProvider) -> Result<()> {
    let (reviews, samples) = try_join(catalog.reviews(), catalog.samples()).await?;
    println!("{}", reviews_table(&reviews));
    ui::print_separator();
    println!("{}", samples_table(&samples));
    Ok(())
}

fn reviews_table(reviews: &[Review]) -> String {
    if reviews.is_empty() {
        return "No reviews to display.".to_string();
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Student"),
        ui::header_cell("University"),
        ui::header_cell("Subject"),
        ui::header_cell("Grade"),
        ui::header_cell("Review"),
    ]);
    for review in reviews {
        table.add_row(vec![
            Cell::new(format!("{}\n{}", review.name, review.country)),
            Cell::new(&review.university),
            Cell::new(&review.subject),
            Cell::new(&review.grade),
            Cell::new(format!("\"{}\"", review.text)),
        ]);
    }

    format!(
        "{}\n\n{}",
        ui::style_text("What Our Students Say", ui::StyleType::Title),
        table
    )
}

fn samples_table(samples: &[SampleAssignment]) -> String {
    if samples.is_empty() {
        return "No samples to display.".to_string();
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Type"),
        ui::header_cell("Title"),
        ui::header_cell("Subject"),
        ui::header_cell("Words"),
        ui::header_cell("University"),
        ui::header_cell("Grade"),
        ui::header_cell("Cover"),
        ui::header_cell("Preview"),
    ]);
    for sample in samples {
        table.add_row(vec![
            Cell::new(&sample.kind),
            Cell::new(&sample.title),
            Cell::new(&sample.subject),
            Cell::new(sample.word_count).set_alignment(CellAlignment::Right),
            Cell::new(&sample.university),
            Cell::new(&sample.grade),
            Cell::new(&sample.cover_color),
            ui::format_optional_cell(sample.preview_url.as_deref(), str::to_string),
        ]);
    }

    format!(
        "{}\n\n{}",
        ui::style_text("Sample Assignments", ui::StyleType::Title),
        table
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(preview: Option<&str>) -> SampleAssignment {
        SampleAssignment {
            id: 9,
            kind: "Essay".to_string(),
            title: "Climate Policy".to_string(),
            subject: "Politics".to_string(),
            word_count: 2000,
            university: "SOAS".to_string(),
            grade: "72%".to_string(),
            cover_color: "from-rose-500 to-pink-600".to_string(),
            preview_url: preview.map(str::to_string),
        }
    }

    #[test]
    fn test_samples_table() {
        let out = samples_table(&[sample(None), sample(Some("https://x.example/9.pdf"))]);
        assert!(out.contains("Climate Policy"));
        assert!(out.contains("2000"));
        assert!(out.contains("N/A"));
        assert!(out.contains("https://x.example/9.pdf"));
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(reviews_table(&[]), "No reviews to display.");
        assert_eq!(samples_table(&[]), "No samples to display.");
    }

    #[test]
    fn test_reviews_table() {
        let review = Review {
            name: "Priya".to_string(),
            university: "UCL".to_string(),
            country: "India".to_string(),
            subject: "Law".to_string(),
            grade: "2:1".to_string(),
            text: "Well argued".to_string(),
        };
        let out = reviews_table(&[review]);
        assert!(out.contains("Priya"));
        assert!(out.contains("\"Well argued\""));
    }
}
