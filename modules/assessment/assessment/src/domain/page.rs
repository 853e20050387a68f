//! One mounted assessment page: greeting, the five widgets, their results and
//! the scheduling trigger.

use assessment_sdk::{CalculationResult, CalculatorKind};

use super::aggregator::SectionResults;
use super::error::DomainError;
use super::repo::{ClientStorage, USER_NAME_KEY};
use super::widget::CalculatorWidget;

#[derive(Debug, Clone)]
pub struct AssessmentPage {
    greeting: String,
    widgets: Vec<CalculatorWidget>,
    results: SectionResults,
    scheduling_open: bool,
}

/// `"Welcome, <name>!"` for a stored non-empty name, `"Welcome!"` otherwise.
#[must_use]
pub fn greeting_for(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => format!("Welcome, {name}!"),
        _ => "Welcome!".to_owned(),
    }
}

impl AssessmentPage {
    /// Reads the stored user name once and builds a fresh page.
    ///
    /// # Errors
    /// Returns [`DomainError::Storage`] if the storage read fails.
    pub async fn mount(storage: &dyn ClientStorage) -> Result<Self, DomainError> {
        let name = storage.get(USER_NAME_KEY).await?;
        Ok(Self::with_greeting(greeting_for(name.as_deref())))
    }

    #[must_use]
    pub fn with_greeting(greeting: String) -> Self {
        Self {
            greeting,
            widgets: CalculatorKind::ALL
                .iter()
                .copied()
                .map(CalculatorWidget::new)
                .collect(),
            results: SectionResults::new(),
            scheduling_open: false,
        }
    }

    #[must_use]
    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    /// Widgets in render order.
    #[must_use]
    pub fn widgets(&self) -> &[CalculatorWidget] {
        &self.widgets
    }

    #[must_use]
    pub fn results(&self) -> &SectionResults {
        &self.results
    }

    #[must_use]
    pub fn scheduling_open(&self) -> bool {
        self.scheduling_open
    }

    fn widget_mut(&mut self, kind: CalculatorKind) -> &mut CalculatorWidget {
        // Widgets are built from `CalculatorKind::ALL`, so every kind has a slot.
        let index = CalculatorKind::ALL
            .iter()
            .position(|k| *k == kind)
            .unwrap_or_default();
        &mut self.widgets[index]
    }

    /// # Errors
    /// Returns [`DomainError::UnknownField`] for a field the calculator lacks.
    pub fn update_input(
        &mut self,
        kind: CalculatorKind,
        field: &str,
        text: impl Into<String>,
    ) -> Result<(), DomainError> {
        self.widget_mut(kind).update_input(field, text)
    }

    /// Runs the widget and records a produced result under its title.
    pub fn calculate(&mut self, kind: CalculatorKind) -> Option<CalculationResult> {
        let widget = self.widget_mut(kind);
        let title = widget.title();
        let result = widget.calculate()?.clone();
        self.results.record(title, result.clone());
        Some(result)
    }

    /// Money total, hidden while nothing has been calculated.
    #[must_use]
    pub fn total(&self) -> Option<f64> {
        (!self.results.is_empty()).then(|| self.results.total_money())
    }

    pub fn open_scheduling(&mut self) {
        self.scheduling_open = true;
    }

    pub fn close_scheduling(&mut self) {
        self.scheduling_open = false;
    }
}
