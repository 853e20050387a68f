//! ROI calculator library.
//!
//! Every calculator is a pure function over already-parsed numbers. Input
//! validation belongs to the widget; negative values are accepted and flow
//! through the formulas unchanged.

use assessment_sdk::{CalculationResult, CalculatorKind, ResultDetail, ResultKind};

use super::numbers::{format_metric, round_half_up};

/// Input field of a calculator widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    /// Raw text the widget starts with.
    pub default: &'static str,
}

/// Published evidence listed beneath a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    pub title: &'static str,
    pub url: &'static str,
}

const CUSTOMER_SERVICE_FIELDS: &[FieldSpec] = &[FieldSpec {
    name: "budget",
    label: "What is your current annual customer service budget?",
    default: "",
}];

const VIRTUAL_RECEPTIONIST_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "callVolume",
        label: "What is your monthly call volume?",
        default: "",
    },
    FieldSpec {
        name: "leadValue",
        label: "Average value per lead ($)",
        default: "100",
    },
];

const APPOINTMENT_SETTER_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "monthlyLeads",
        label: "How many leads do you receive monthly?",
        default: "",
    },
    FieldSpec {
        name: "dealValue",
        label: "Average deal value ($)",
        default: "1000",
    },
];

const ONBOARDING_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "monthlyOnboardings",
        label: "How many new clients/employees do you onboard monthly?",
        default: "",
    },
    FieldSpec {
        name: "onboardingSalary",
        label: "Monthly salary for onboarding staff ($)",
        default: "4000",
    },
];

const WORKFLOW_AUTOMATION_FIELDS: &[FieldSpec] = &[FieldSpec {
    name: "manualHours",
    label: "How many hours per month do you spend on manual workflows?",
    default: "",
}];

const CUSTOMER_SERVICE_REFERENCES: &[Reference] = &[
    Reference {
        title: "Klarna reduced support ticket resolution time from 11 to 2 minutes, generating $40M annual profit improvements",
        url: "https://www.singlegrain.com/blog/ms/klarna-ai/",
    },
    Reference {
        title: "Businesses typically save around 30% on customer support costs with chatbots",
        url: "https://adamconnell.me/chatbot-statistics/",
    },
    Reference {
        title: "Cost per ticket reduced from $40 to $8 (80% reduction), with AI handling 93% of support questions",
        url: "https://ai-for.business/ai-case-study-saving-80-on-customer-support-costs-with-generative-ai/",
    },
];

const VIRTUAL_RECEPTIONIST_REFERENCES: &[Reference] = &[
    Reference {
        title: "Save up to $250,000 over five years compared to full-time reception staff",
        url: "https://dialzara.com/blog/how-much-does-an-ai-virtual-receptionist-cost/",
    },
    Reference {
        title: "Handle up to 100 calls simultaneously, eliminating wait times",
        url: "https://dialzara.com/blog/what-is-an-ai-virtual-receptionist-and-how-can-it-benefit-your-business/",
    },
    Reference {
        title: "Business saved $20,000 in just 30 days by eliminating missed calls",
        url: "https://www.reddit.com/r/SideProject/comments/1e2kbdz/i_recreated_an_ai_phone_agent_that_saved_20000_in/",
    },
];

const APPOINTMENT_SETTER_REFERENCES: &[Reference] = &[
    Reference {
        title: "21x higher lead qualification rate with 5-minute response time",
        url: "https://www.callpage.io/blog/posts/speed-to-lead",
    },
    Reference {
        title: "Up to 381% increase in conversion rates with 10-second response time",
        url: "https://www.trysetter.com/ai-appointment-setter",
    },
    Reference {
        title: "20% increase in bookings and $20,000 saved in first month",
        url: "https://www.reddit.com/r/SideProject/comments/1e2kbdz/i_recreated_an_ai_phone_agent_that_saved_20000_in/",
    },
];

const ONBOARDING_REFERENCES: &[Reference] = &[
    Reference {
        title: "Reduce onboarding time from 5+ days to just 10 minutes",
        url: "https://qflowbpm.com/process-onboarding/",
    },
    Reference {
        title: "Up to 60% year-over-year revenue growth with automated onboarding",
        url: "https://enboarder.com/blog/employee-engagement-onboarding-stats/",
    },
    Reference {
        title: "82% improvement in new hire retention",
        url: "https://withe.co/blog/employee-onboarding-statistics",
    },
    Reference {
        title: "Save up to 20% of salary costs from improved retention",
        url: "https://www.blaze.tech/post/the-essential-guide-to-employee-onboarding-automation",
    },
];

const WORKFLOW_AUTOMATION_REFERENCES: &[Reference] = &[
    Reference {
        title: "70% reduction in manual processing time and 90% reduction in errors",
        url: "https://beslick.com/what-is-ai-workflow-automation/",
    },
    Reference {
        title: "Scale operations without additional human resources",
        url: "https://www.pulpstream.com/resources/blog/ai-workflow-automation",
    },
    Reference {
        title: "Improved decision-making and enhanced customer experience",
        url: "https://www.leewayhertz.com/ai-for-workflow-automation/",
    },
];

/// Input fields of `kind`, in argument order of [`compute`].
#[must_use]
pub fn fields(kind: CalculatorKind) -> &'static [FieldSpec] {
    match kind {
        CalculatorKind::CustomerService => CUSTOMER_SERVICE_FIELDS,
        CalculatorKind::VirtualReceptionist => VIRTUAL_RECEPTIONIST_FIELDS,
        CalculatorKind::AppointmentSetter => APPOINTMENT_SETTER_FIELDS,
        CalculatorKind::Onboarding => ONBOARDING_FIELDS,
        CalculatorKind::WorkflowAutomation => WORKFLOW_AUTOMATION_FIELDS,
    }
}

#[must_use]
pub fn references(kind: CalculatorKind) -> &'static [Reference] {
    match kind {
        CalculatorKind::CustomerService => CUSTOMER_SERVICE_REFERENCES,
        CalculatorKind::VirtualReceptionist => VIRTUAL_RECEPTIONIST_REFERENCES,
        CalculatorKind::AppointmentSetter => APPOINTMENT_SETTER_REFERENCES,
        CalculatorKind::Onboarding => ONBOARDING_REFERENCES,
        CalculatorKind::WorkflowAutomation => WORKFLOW_AUTOMATION_REFERENCES,
    }
}

/// Dispatches to the calculator of `kind`.
///
/// `inputs` must hold one number per entry of [`fields`]; any other arity
/// yields `None`.
#[must_use]
pub fn compute(kind: CalculatorKind, inputs: &[f64]) -> Option<CalculationResult> {
    let result = match (kind, inputs) {
        (CalculatorKind::CustomerService, &[budget]) => customer_service(budget),
        (CalculatorKind::VirtualReceptionist, &[calls, lead_value]) => {
            virtual_receptionist(calls, lead_value)
        }
        (CalculatorKind::AppointmentSetter, &[leads, deal_value]) => {
            appointment_setter(leads, deal_value)
        }
        (CalculatorKind::Onboarding, &[onboardings, salary]) => onboarding(onboardings, salary),
        (CalculatorKind::WorkflowAutomation, &[hours]) => workflow_automation(hours),
        _ => return None,
    };
    Some(result)
}

fn money(
    raw_value: f64,
    description: String,
    source: &str,
    details: Option<Vec<ResultDetail>>,
) -> CalculationResult {
    CalculationResult {
        metric: format_metric(ResultKind::Money, raw_value),
        description,
        source: source.to_owned(),
        raw_value,
        kind: ResultKind::Money,
        details,
    }
}

/// AI support agents cut service spend by 70%.
#[must_use]
pub fn customer_service(annual_budget: f64) -> CalculationResult {
    const SAVINGS_RATE: f64 = 0.7;

    let savings = annual_budget * SAVINGS_RATE;
    money(
        savings,
        "Potential annual savings".to_owned(),
        "Industry research shows up to 70% cost reduction",
        None,
    )
}

/// A quarter of inbound calls go unanswered; each captured call is worth one lead.
#[must_use]
pub fn virtual_receptionist(monthly_calls: f64, lead_value: f64) -> CalculationResult {
    const MISSED_CALL_RATE: f64 = 0.25;

    let missed_calls = round_half_up(monthly_calls * MISSED_CALL_RATE);
    let revenue = missed_calls * lead_value;
    money(
        revenue,
        format!("Potential monthly revenue from {missed_calls} captured missed calls"),
        "Based on industry average of 25% missed calls",
        None,
    )
}

/// Speed-to-lead: 4% conversion at 30+ minutes vs 21% at 5 minutes.
#[must_use]
pub fn appointment_setter(monthly_leads: f64, deal_value: f64) -> CalculationResult {
    const CURRENT_CONVERSION: f64 = 0.04;
    const AI_CONVERSION: f64 = 0.21;

    let current_conversions = round_half_up(monthly_leads * CURRENT_CONVERSION);
    let ai_conversions = round_half_up(monthly_leads * AI_CONVERSION);
    let additional_revenue = ai_conversions * deal_value - current_conversions * deal_value;

    money(
        additional_revenue,
        format!(
            "Additional monthly revenue from {} more conversions",
            ai_conversions - current_conversions
        ),
        "Based on 5-minute response time vs. 30+ minutes",
        None,
    )
}

/// Automated onboarding removes 90% of a 20 hour process.
#[must_use]
pub fn onboarding(monthly_onboardings: f64, monthly_salary: f64) -> CalculationResult {
    const TIME_REDUCTION: f64 = 0.9;
    const HOURS_PER_ONBOARDING: f64 = 20.0;
    const WORK_HOURS_PER_MONTH: f64 = 160.0;

    let new_hours = HOURS_PER_ONBOARDING * (1.0 - TIME_REDUCTION);
    let hourly_rate = monthly_salary / WORK_HOURS_PER_MONTH;
    let current_cost = monthly_onboardings * HOURS_PER_ONBOARDING * hourly_rate;
    let new_cost = monthly_onboardings * new_hours * hourly_rate;

    money(
        current_cost - new_cost,
        "Monthly cost savings through automated onboarding".to_owned(),
        "Based on industry average of 90% time reduction",
        Some(vec![
            ResultDetail {
                name: "currentCost",
                value: current_cost,
            },
            ResultDetail {
                name: "newCost",
                value: new_cost,
            },
            ResultDetail {
                name: "timeReduction",
                value: HOURS_PER_ONBOARDING - new_hours,
            },
        ]),
    )
}

/// Manual work costs $50/h plus a 15% error rate at $200 per error; automation
/// keeps 30% of the hours and a tenth of the error rate.
#[must_use]
pub fn workflow_automation(manual_hours: f64) -> CalculationResult {
    const HOURLY_RATE: f64 = 50.0;
    const COST_PER_ERROR: f64 = 200.0;
    const ERROR_RATE: f64 = 0.15;
    const REMAINING_HOURS: f64 = 0.3;
    const REMAINING_ERRORS: f64 = 0.1;

    let current_labor = manual_hours * HOURLY_RATE;
    let current_errors = manual_hours * ERROR_RATE * COST_PER_ERROR;
    let current_total = current_labor + current_errors;

    let ai_hours = manual_hours * REMAINING_HOURS;
    let ai_labor = ai_hours * HOURLY_RATE;
    let ai_errors = ai_hours * (ERROR_RATE * REMAINING_ERRORS) * COST_PER_ERROR;
    let ai_total = ai_labor + ai_errors;

    money(
        current_total - ai_total,
        "Monthly cost savings through AI automation".to_owned(),
        "Based on industry averages for labor costs and error rates",
        Some(vec![
            ResultDetail {
                name: "currentCosts",
                value: current_total,
            },
            ResultDetail {
                name: "aiCosts",
                value: ai_total,
            },
            ResultDetail {
                name: "laborSavings",
                value: current_labor - ai_labor,
            },
            ResultDetail {
                name: "errorSavings",
                value: current_errors - ai_errors,
            },
        ]),
    )
}
