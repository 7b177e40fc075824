use log::LevelFilter;
use simplelog::Config;
use simplelog::SimpleLogger;
use viewtable::View;
use viewtable::error::TemplateError;
use viewtable::table_for;
use viewtable::table_for_with;

fn init_logging() {
    // Ignore the error when a second test initializes the logger.
    let _ = SimpleLogger::init(LevelFilter::Debug, Config::default());
}

#[test]
fn test_render_returns_template_output() {
    init_logging();
    let view = View::new();

    let result = view.render(|| Ok(table_for("users")));

    assert_eq!(
        result.unwrap(),
        "<table summary=\"Table for Users\" role=\"grid\" class=\"table\">\n</table>\n"
    );
}

#[test]
fn test_render_with_builder_template() {
    init_logging();
    let view = View::new();

    let result = view.render(|| {
        Ok(table_for_with("users", |t| {
            t.body(|body| body.row(|row| row.cell("Cell A")))
        }))
    });

    assert!(result.unwrap().contains("<td role=\"gridcell\">Cell A</td>"));
}

#[test]
fn test_failing_template_yields_error_and_no_output() {
    init_logging();
    let view = View::new();

    let result: Result<String, TemplateError> =
        view.render(|| Err(TemplateError::evaluation("missing user record")));

    let error = result.unwrap_err();
    assert_eq!(
        error.to_string(),
        "template evaluation failed: missing user record"
    );
}

#[test]
fn test_template_can_propagate_errors_with_question_mark() {
    init_logging();
    let view = View::new();

    fn load_resource_name() -> Result<String, TemplateError> {
        Err(TemplateError::evaluation("resource lookup failed"))
    }

    let result = view.render(|| {
        let resource = load_resource_name()?;
        Ok(table_for(&resource))
    });

    assert!(result.is_err());
}
