//! Terminal presenter
//!
//! Receives choice requests on the UI side of the input channel and walks the
//! operator through them with dialoguer prompts. Each prompt toggles options
//! on a [`ChoiceForm`]; the form decides what the final response is.

use askchoice_core::choice::{ChoiceForm, ChoiceRequest, ChoiceResponse, QuestionState};
use askchoice_core::input::{InputChannelHandle, InputResponse};
use colored::*;
use dialoguer::{MultiSelect, Select, theme::ColorfulTheme};
use tokio::sync::oneshot;
use tracing::{debug, warn};

const SUBMIT: usize = 0;
const SKIP: usize = 1;

/// Answer requests until the channel closes
pub async fn run(mut handle: InputChannelHandle) {
    while let Some(request) = handle.next_request().await {
        let request_id = request.id;
        let response = match prompt(request.request).await {
            Some(response) => InputResponse::from_choice(request_id, &response),
            None => InputResponse::cancelled(request_id),
        };
        if let Err(e) = handle.respond(response).await {
            warn!(%request_id, error = %e, "failed to deliver choice response");
            break;
        }
    }
}

/// Run the prompts on a dedicated thread; `None` means the operator cancelled
async fn prompt(request: ChoiceRequest) -> Option<ChoiceResponse> {
    let (tx, rx) = oneshot::channel();
    std::thread::spawn(move || {
        let outcome = fill_form(request);
        let _ = tx.send(outcome);
    });

    match rx.await {
        Ok(Ok(response)) => response,
        Ok(Err(e)) => {
            warn!(error = %e, "terminal prompt failed");
            None
        }
        Err(_) => None,
    }
}

fn fill_form(request: ChoiceRequest) -> dialoguer::Result<Option<ChoiceResponse>> {
    let theme = ColorfulTheme::default();
    let mut form = ChoiceForm::new(request);
    let questions = form.request().questions.clone();

    if let Some(title) = &form.request().title {
        eprintln!("\n{}", title.bold().underline());
    }

    for question in &questions {
        let labels: Vec<&str> = question.options.iter().map(|o| o.label.as_str()).collect();
        eprintln!("{}", format!("[{}]", form.progress()).dimmed());

        if question.allow_multiple {
            let picked = MultiSelect::with_theme(&theme)
                .with_prompt(&question.prompt)
                .items(&labels)
                .interact_opt()?;
            for idx in picked.unwrap_or_default() {
                form.toggle(&question.id, &question.options[idx].id);
            }
        } else {
            let picked = Select::with_theme(&theme)
                .with_prompt(&question.prompt)
                .items(&labels)
                .interact_opt()?;
            if let Some(idx) = picked {
                form.toggle(&question.id, &question.options[idx].id);
            }
        }

        if form.question_state(&question.id) == QuestionState::Unanswered {
            debug!(question_id = %question.id, "question left unanswered");
        }
    }

    let action = Select::with_theme(&theme)
        .with_prompt(format!("Answered {}", form.progress()))
        .items(&["Submit answers", "Skip these questions"])
        .default(SUBMIT)
        .interact_opt()?;

    Ok(match action {
        Some(SUBMIT) => form.submit(),
        Some(SKIP) => form.skip(),
        _ => None,
    })
}
