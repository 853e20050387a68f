#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::domain::calculators;
    use crate::domain::page::AssessmentPage;
    use assessment_sdk::{CalculatorKind, LeadIdentity, Theme};
    use serde_json::json;
    use uuid::Uuid;

    #[test]
    fn test_calculator_dto_carries_catalog_defaults() {
        let dto: dto::CalculatorDto = CalculatorKind::VirtualReceptionist.into();

        assert_eq!(dto.id, "virtual-receptionist");
        assert_eq!(dto.title, "Virtual Receptionist");
        let defaults: Vec<_> = dto
            .fields
            .iter()
            .map(|f| (f.name.as_str(), f.default.as_str()))
            .collect();
        assert_eq!(defaults, vec![("callVolume", ""), ("leadValue", "100")]);
        assert_eq!(
            dto.references.len(),
            calculators::references(CalculatorKind::VirtualReceptionist).len()
        );
    }

    #[test]
    fn test_result_dto_serializes_camel_case() {
        let result = calculators::onboarding(10.0, 4000.0);
        let dto = dto::CalculationResultDto::from(&result);

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["type"], "money");
        assert!(value.get("kind").is_none());
        assert_eq!(value["rawValue"], json!(4500.0));
        assert!(value["details"].is_array());
    }

    #[test]
    fn test_result_dto_omits_missing_details() {
        let dto = dto::CalculationResultDto::from(&calculators::customer_service(1000.0));
        let value = serde_json::to_value(&dto).unwrap();
        assert!(value.get("details").is_none());
    }

    #[test]
    fn test_inputs_request_defaults_to_empty() {
        let req: dto::InputsRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.into_pairs().is_empty());

        let req: dto::InputsRequest =
            serde_json::from_value(json!({"inputs": {"monthlyLeads": "1000"}})).unwrap();
        assert_eq!(
            req.into_pairs(),
            vec![("monthlyLeads".to_owned(), "1000".to_owned())]
        );
    }

    #[test]
    fn test_lead_response_redirects_to_assessment() {
        let dto: dto::LeadResponse = LeadIdentity {
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
        }
        .into();

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["redirectTo"], "/assessment");
    }

    #[test]
    fn test_page_dto_hides_total_until_calculated() {
        let id = Uuid::new_v4();
        let mut page = AssessmentPage::with_greeting("Welcome!".to_owned());

        let dto = dto::PageDto::from_page(id, &page, "https://calendly.com/pateljilly1/30min");
        assert_eq!(dto.widgets.len(), 5);
        assert!(dto.total.is_none());
        assert!(dto.total_metric.is_none());
        assert!(!dto.scheduling.open);

        page.update_input(CalculatorKind::AppointmentSetter, "monthlyLeads", "1000")
            .unwrap();
        page.calculate(CalculatorKind::AppointmentSetter).unwrap();

        let dto = dto::PageDto::from_page(id, &page, "https://calendly.com/pateljilly1/30min");
        assert_eq!(dto.total_metric.as_deref(), Some("$170,000"));
        assert_eq!(dto.results.len(), 1);
        assert_eq!(dto.results[0].title, "AI Appointment Setter");
    }

    #[test]
    fn test_theme_value_round_trip() {
        let dto: dto::ThemeDto = serde_json::from_value(json!({"theme": "dark"})).unwrap();
        assert_eq!(Theme::from(dto.theme), Theme::Dark);
        assert!(serde_json::from_value::<dto::ThemeDto>(json!({"theme": "sepia"})).is_err());
    }
}
