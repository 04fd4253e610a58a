use pretty_assertions::assert_eq;

use crate::utils::{renal_front_end, renal_models};
use clinical_severity::{
    CompletenessPolicy, Event, FILL_IN_MESSAGE, FeatureSpec, FormSchema, FrontEnd, Prediction,
    Reply, SeverityLabel, schema::builtin::renal,
};

fn run(front_end: &mut FrontEnd, script: &str) -> String {
    let mut output = Vec::new();
    front_end.run(script.as_bytes(), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

/// Setting values only changes the form; predict uses the current snapshot
#[test]
fn test_set_then_predict() -> clinical_severity::Result<()> {
    let mut front_end = renal_front_end();

    for (feature, value) in [
        ("bun", 100.0),
        ("creatinine", 20.0),
        ("potassium", 6.5),
        ("bp_systolic", 180.0),
        ("bp_diastolic", 110.0),
    ] {
        front_end.handle(Event::Set {
            feature: feature.to_string(),
            value,
        })?;
    }

    let reply = front_end.handle(Event::Predict)?;
    assert_eq!(
        reply,
        Reply::Prediction {
            prediction: Prediction::Classified(SeverityLabel::Severe),
            message: "The predicted renal dialysis stage is: Severe".to_string(),
        }
    );
    Ok(())
}

/// Out-of-range values are clamped and the reply says so
#[test]
fn test_set_reports_clamping() -> clinical_severity::Result<()> {
    let mut front_end = renal_front_end();
    let reply = front_end.handle(Event::parse("set bun 500")?)?;

    assert_eq!(reply.text(), Some("BUN (mg/dL) = 120.0 (adjusted from 500)"));
    assert_eq!(front_end.form().control("bun").unwrap().value(), 120.0);
    Ok(())
}

/// Reset brings back the defaults
#[test]
fn test_reset_restores_defaults() -> clinical_severity::Result<()> {
    let mut front_end = renal_front_end();
    front_end.handle(Event::parse("potassium=6.9")?)?;
    front_end.handle(Event::Reset)?;

    assert_eq!(
        front_end.form().snapshot().as_slice(),
        &[50.0, 10.0, 5.0, 140.0, 90.0]
    );
    Ok(())
}

/// A script of commands is answered line by line and errors do not end the session
#[test]
fn test_interactive_session() {
    let mut front_end = renal_front_end();
    let output = run(
        &mut front_end,
        "set bun 20\nset creatinine 3\nfly away\nset lactate 2\npredict\nquit\npredict\n",
    );

    assert!(output.starts_with("Renal Dialysis Patient Classification App\n"));
    assert!(output.contains("BUN (mg/dL) = 20.0\n"));
    assert!(output.contains("Error: Command error: unknown command 'fly'"));
    assert!(output.contains("Error: Unknown feature: lactate"));
    assert_eq!(
        output.matches("The predicted renal dialysis stage is: ").count(),
        1
    );
}

/// The page lists title, subtitle and every control with its help text
#[test]
fn test_show_renders_page() -> clinical_severity::Result<()> {
    let mut front_end = renal_front_end();
    let page = front_end.handle(Event::Show)?;
    let page = page.text().unwrap();

    let lines: Vec<_> = page.lines().take(3).collect();
    assert_eq!(
        lines,
        vec![
            "Renal Dialysis Patient Classification App",
            "=========================================",
            "Adjust the patient data below to predict the renal dialysis stage",
        ]
    );
    assert!(page.contains("Potassium (mEq/L) [potassium]: 5.0"));
    assert!(page.contains("Mild: 3.5-5.0, Moderate: 5.1-5.5, Severe: 5.5-7.0"));
    assert!(page.contains("Mild: 60-90, Moderate: 90-100, Severe: 100-120"));
    Ok(())
}

/// With a zero-capable control, the zero check blocks prediction unless disabled
#[test]
fn test_zero_policy_through_the_front_end() -> clinical_severity::Result<()> {
    let mut schema: FormSchema = renal();
    let bun: &mut FeatureSpec = &mut schema.features[0];
    bun.min = 0.0;

    let mut strict = FrontEnd::new(schema.clone(), renal_models(), CompletenessPolicy::RejectZero)?;
    strict.handle(Event::parse("set bun 0")?)?;
    assert_eq!(strict.handle(Event::Predict)?.text(), Some(FILL_IN_MESSAGE));

    let mut lenient = FrontEnd::new(schema, renal_models(), CompletenessPolicy::AcceptAll)?;
    lenient.handle(Event::parse("set bun 0")?)?;
    let reply = lenient.handle(Event::Predict)?;
    assert!(matches!(
        reply,
        Reply::Prediction {
            prediction: Prediction::Classified(_),
            ..
        }
    ));
    Ok(())
}

/// The ranges command lists every measurement's reference bands in schema order
#[test]
fn test_ranges_lists_reference_table() -> clinical_severity::Result<()> {
    let mut front_end = renal_front_end();
    let reply = front_end.handle(Event::parse("ranges")?)?;

    assert_eq!(
        reply.text(),
        Some(
            "Reference ranges:\n\
             \x20 BUN: Mild: 10-50, Moderate: 50-70, Severe: 70-120\n\
             \x20 Creatinine: Mild: 2-10, Moderate: 10-15, Severe: 15-25\n\
             \x20 Potassium: Mild: 3.5-5.0, Moderate: 5.1-5.5, Severe: 5.5-7.0\n\
             \x20 Systolic Blood Pressure: Mild: 100-140, Moderate: 140-160, Severe: 160-200\n\
             \x20 Diastolic Blood Pressure: Mild: 60-90, Moderate: 90-100, Severe: 100-120"
        )
    );
    Ok(())
}
