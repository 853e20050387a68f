//! Calculator widget: raw text inputs plus the latest result of one calculator.

use assessment_sdk::{CalculationResult, CalculatorKind};
use tracing::debug;

use super::calculators;
use super::error::DomainError;
use super::numbers::parse_integer;

#[derive(Debug, Clone)]
pub struct CalculatorWidget {
    kind: CalculatorKind,
    inputs: Vec<String>,
    result: Option<CalculationResult>,
}

impl CalculatorWidget {
    /// New widget with the catalog's default input text and no result.
    #[must_use]
    pub fn new(kind: CalculatorKind) -> Self {
        let inputs = calculators::fields(kind)
            .iter()
            .map(|field| field.default.to_owned())
            .collect();
        Self {
            kind,
            inputs,
            result: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> CalculatorKind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    #[must_use]
    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    /// `(field name, raw text)` pairs in field order.
    pub fn inputs(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        calculators::fields(self.kind)
            .iter()
            .zip(&self.inputs)
            .map(|(field, text)| (field.name, text.as_str()))
    }

    /// Stores `text` verbatim as the raw value of `field`.
    ///
    /// # Errors
    /// Returns [`DomainError::UnknownField`] when the calculator has no such field.
    pub fn update_input(&mut self, field: &str, text: impl Into<String>) -> Result<(), DomainError> {
        let index = calculators::fields(self.kind)
            .iter()
            .position(|spec| spec.name == field)
            .ok_or_else(|| DomainError::unknown_field(self.kind, field))?;
        self.inputs[index] = text.into();
        Ok(())
    }

    /// Parses every field and runs the calculator.
    ///
    /// If any field is not a finite integer nothing happens: the previous
    /// result is kept and `None` is returned. The same holds when the figures
    /// overflow to a non-finite value. Otherwise the new result is stored and
    /// a reference to it returned for reporting upward.
    pub fn calculate(&mut self) -> Option<&CalculationResult> {
        let parsed: Option<Vec<f64>> = self
            .inputs
            .iter()
            .map(|text| parse_integer(text).filter(|n| n.is_finite()))
            .collect();
        let Some(numbers) = parsed else {
            debug!(calculator = %self.kind, "ignoring non-numeric input");
            return None;
        };

        let result = calculators::compute(self.kind, &numbers)?;
        if !result.raw_value.is_finite() {
            debug!(calculator = %self.kind, "ignoring non-finite result");
            return None;
        }
        debug!(calculator = %self.kind, raw_value = result.raw_value, "calculated");
        self.result = Some(result);
        self.result.as_ref()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn new_widget_uses_catalog_defaults() {
        let widget = CalculatorWidget::new(CalculatorKind::AppointmentSetter);
        let inputs: Vec<_> = widget.inputs().collect();
        assert_eq!(inputs, vec![("monthlyLeads", ""), ("dealValue", "1000")]);
        assert!(widget.result().is_none());
        assert_eq!(widget.title(), "AI Appointment Setter");
    }

    #[test]
    fn calculate_with_default_second_field() {
        let mut widget = CalculatorWidget::new(CalculatorKind::AppointmentSetter);
        widget.update_input("monthlyLeads", "1000").unwrap();

        let result = widget.calculate().unwrap();
        assert_eq!(result.metric, "$170,000");
        assert_eq!(widget.result().unwrap().metric, "$170,000");
    }

    #[test]
    fn update_input_stores_text_verbatim() {
        let mut widget = CalculatorWidget::new(CalculatorKind::CustomerService);
        widget.update_input("budget", "  12abc ").unwrap();
        assert_eq!(widget.inputs().next(), Some(("budget", "  12abc ")));
    }

    #[test]
    fn update_input_rejects_unknown_field() {
        let mut widget = CalculatorWidget::new(CalculatorKind::CustomerService);
        let err = widget.update_input("callVolume", "5").unwrap_err();
        assert!(matches!(err, DomainError::UnknownField { .. }));
    }

    #[test]
    fn non_numeric_input_is_a_silent_no_op() {
        let mut widget = CalculatorWidget::new(CalculatorKind::CustomerService);
        assert!(widget.calculate().is_none(), "empty default must not compute");

        widget.update_input("budget", "1000").unwrap();
        assert_eq!(widget.calculate().unwrap().metric, "$700");

        widget.update_input("budget", "lots").unwrap();
        assert!(widget.calculate().is_none());
        assert_eq!(
            widget.result().unwrap().metric,
            "$700",
            "previous result must be kept"
        );
    }

    #[test]
    fn one_bad_field_blocks_two_field_calculator() {
        let mut widget = CalculatorWidget::new(CalculatorKind::VirtualReceptionist);
        widget.update_input("callVolume", "200").unwrap();
        widget.update_input("leadValue", "n/a").unwrap();
        assert!(widget.calculate().is_none());
        assert!(widget.result().is_none());
    }

    #[test]
    fn overflowing_digits_are_ignored() {
        let mut widget = CalculatorWidget::new(CalculatorKind::AppointmentSetter);
        widget.update_input("monthlyLeads", "1000").unwrap();
        assert!(widget.calculate().is_some());

        widget.update_input("monthlyLeads", "9".repeat(400)).unwrap();
        assert!(widget.calculate().is_none());
        assert_eq!(widget.result().unwrap().metric, "$170,000");
    }

    #[test]
    fn overflowing_result_is_ignored() {
        let big = format!("1{}", "0".repeat(200));
        let mut widget = CalculatorWidget::new(CalculatorKind::VirtualReceptionist);
        widget.update_input("callVolume", big.as_str()).unwrap();
        widget.update_input("leadValue", big).unwrap();

        assert!(widget.calculate().is_none());
        assert!(widget.result().is_none());
    }
}
