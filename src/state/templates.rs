//! Built-in template catalog

use super::model::{FieldDraft, FieldKind, Template, Validation};

fn template(
    id: &str,
    name: &str,
    description: &str,
    category: &str,
    drafts: Vec<FieldDraft>,
) -> Template {
    Template {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        fields: drafts
            .into_iter()
            .enumerate()
            .map(|(i, d)| d.into_field((i + 1).to_string()))
            .collect(),
    }
}

fn contact_us() -> Template {
    template(
        "contact-us",
        "Contact Us",
        "Basic contact form with name, email, and message",
        "Business",
        vec![
            FieldDraft::new(FieldKind::Text, "Full Name")
                .placeholder("Enter your full name")
                .required(true)
                .step(1),
            FieldDraft::new(FieldKind::Email, "Email Address")
                .placeholder("Enter your email")
                .required(true)
                .step(1),
            FieldDraft::new(FieldKind::Phone, "Phone Number")
                .placeholder("Enter your phone number")
                .step(1),
            FieldDraft::new(FieldKind::Textarea, "Message")
                .placeholder("Enter your message")
                .required(true)
                .validation(Validation {
                    min_length: Some(10),
                    ..Default::default()
                })
                .step(1),
        ],
    )
}

fn survey() -> Template {
    template(
        "survey",
        "Customer Survey",
        "Multi-step customer feedback survey",
        "Survey",
        vec![
            FieldDraft::new(FieldKind::Radio, "How satisfied are you with our service?")
                .required(true)
                .options([
                    "Very Satisfied",
                    "Satisfied",
                    "Neutral",
                    "Dissatisfied",
                    "Very Dissatisfied",
                ])
                .step(1),
            FieldDraft::new(FieldKind::Select, "How did you hear about us?")
                .required(true)
                .options([
                    "Google Search",
                    "Social Media",
                    "Friend Referral",
                    "Advertisement",
                    "Other",
                ])
                .step(1),
            FieldDraft::new(FieldKind::Checkbox, "Which features do you use most?")
                .options(["Feature A", "Feature B", "Feature C", "Feature D"])
                .step(2),
            FieldDraft::new(FieldKind::Textarea, "Additional Comments")
                .placeholder("Share any additional feedback")
                .step(2),
        ],
    )
}

fn registration() -> Template {
    template(
        "registration",
        "Event Registration",
        "Complete event registration form",
        "Events",
        vec![
            FieldDraft::new(FieldKind::Text, "First Name")
                .placeholder("Enter your first name")
                .required(true)
                .step(1),
            FieldDraft::new(FieldKind::Text, "Last Name")
                .placeholder("Enter your last name")
                .required(true)
                .step(1),
            FieldDraft::new(FieldKind::Email, "Email Address")
                .placeholder("Enter your email")
                .required(true)
                .step(1),
            FieldDraft::new(FieldKind::Phone, "Phone Number")
                .placeholder("Enter your phone number")
                .required(true)
                .step(2),
            FieldDraft::new(FieldKind::Select, "T-Shirt Size")
                .required(true)
                .options(["XS", "S", "M", "L", "XL", "XXL"])
                .step(2),
            FieldDraft::new(FieldKind::Checkbox, "Dietary Restrictions")
                .options(["Vegetarian", "Vegan", "Gluten-Free", "Nut Allergy", "None"])
                .step(2),
        ],
    )
}

/// Templates every fresh store starts with
pub fn default_templates() -> Vec<Template> {
    vec![contact_us(), survey(), registration()]
}
