use super::ui;
use crate::core::contact::{ContactForm, StoredSubmission, SubmissionStore};
use anyhow::Result;
use comfy_table::Cell;

/// Validates and stores an enquiry, then prints the confirmation.
pub async fn submit(store: &dyn SubmissionStore, form: &ContactForm) -> Result<String> {
    form.validate()?;
    let reference = store.save(form).await?;

    println!(
        "{}",
        ui::style_text("Message sent successfully!", ui::StyleType::TotalValue)
    );
    println!(
        "Thank you, {}. We'll get back to you within 24 hours. Reference: {}",
        form.name.trim(),
        ui::style_text(&reference, ui::StyleType::TotalLabel)
    );
    Ok(reference)
}

pub async fn list(store: &dyn SubmissionStore) -> Result<()> {
    let submissions = store.list().await?;
    println!("{}", submissions_table(&submissions));
    Ok(())
}

fn submissions_table(submissions: &[StoredSubmission]) -> String {
    if submissions.is_empty() {
        return "No enquiries stored.".to_string();
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Reference"),
        ui::header_cell("Received"),
        ui::header_cell("From"),
        ui::header_cell("Subject"),
        ui::header_cell("Type"),
        ui::header_cell("Words"),
        ui::header_cell("Deadline"),
    ]);
    for submission in submissions {
        let form = &submission.form;
        table.add_row(vec![
            Cell::new(&submission.reference),
            Cell::new(submission.submitted_at.format("%Y-%m-%d %H:%M")),
            Cell::new(format!("{} <{}>", form.name, form.email)),
            Cell::new(&form.subject),
            ui::format_optional_cell(form.assignment_type, |t| t.to_string()),
            ui::format_optional_cell(form.word_count.as_deref(), str::to_string),
            ui::format_optional_cell(form.deadline, |d| d.format("%Y-%m-%d").to_string()),
        ]);
    }

    format!(
        "{}\n\n{}",
        ui::style_text("Enquiries", ui::StyleType::Title),
        table
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::contact::EnquiryType;
    use crate::store::memory::MemorySubmissionStore;
    use chrono::NaiveDate;

    fn form() -> ContactForm {
        ContactForm {
            name: "Hannah Lee".to_string(),
            email: "hannah@example.org".to_string(),
            subject: "Nursing case study".to_string(),
            assignment_type: Some(EnquiryType::Coursework),
            word_count: Some("2500".to_string()),
            deadline: NaiveDate::from_ymd_opt(2026, 12, 1),
            message: "Case study on patient handover.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_stores_valid_form() {
        let store = MemorySubmissionStore::new();
        let reference = submit(&store, &form()).await.unwrap();
        assert_eq!(reference, "Q-000001");

        let stored = store.list().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].form.subject, "Nursing case study");
    }

    #[tokio::test]
    async fn test_submit_rejects_invalid_form() {
        let store = MemorySubmissionStore::new();
        let invalid = ContactForm {
            email: "not-an-email".to_string(),
            ..form()
        };
        assert!(submit(&store, &invalid).await.is_err());
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submissions_table() {
        let store = MemorySubmissionStore::new();
        store.save(&form()).await.unwrap();
        let out = submissions_table(&store.list().await.unwrap());
        assert!(out.contains("Q-000001"));
        assert!(out.contains("hannah@example.org"));
        assert!(out.contains("2026-12-01"));
        assert!(out.contains("Coursework"));
    }
}
