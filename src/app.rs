use std::{
    path::Path,
    process::ExitCode,
    sync::mpsc::{self, Receiver},
};

use anyhow::{bail, Result};

use crate::{
    agent::{self, http::HttpAgentTransport},
    cli::{Cli, Command},
    domain::{
        events::AppEvent,
        message::{Message, Role},
        reply::AgentReply,
        screen::Screen,
        session::SessionId,
        widget_state::WidgetState,
    },
    infra, ui,
    usecases::{
        self, attach,
        bootstrap::{self, ConfigOverrides},
        context::AppContext,
        send_message::{self, SendOutcome},
        widget::now_ms,
    },
};

const ONE_SHOT_REPLY_LOST: &str = "ONE_SHOT_REPLY_LOST";

pub fn run(cli: Cli) -> Result<ExitCode> {
    let overrides = ConfigOverrides {
        base_url: cli.base_url.clone(),
    };
    let (context, _log_guard) = bootstrap::bootstrap(cli.config.as_deref(), &overrides)?;

    tracing::debug!(
        ui = ui::module_name(),
        domain = crate::domain::module_name(),
        agent = agent::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    match cli.command_or_default() {
        Command::Run => {
            let mut widget = bootstrap::compose_widget(&context)?;
            ui::shell::start(
                &context,
                widget.event_source.as_mut(),
                widget.orchestrator.as_mut(),
            )?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Send {
            message,
            file,
            session,
        } => run_one_shot(&context, &message, file.as_deref(), session),
    }
}

/// Sends one message through the regular dispatcher and prints the exchange.
fn run_one_shot(
    context: &AppContext,
    message: &str,
    file: Option<&Path>,
    session: Option<String>,
) -> Result<ExitCode> {
    let (reply_tx, reply_rx) = mpsc::channel();
    let transport = HttpAgentTransport::new(&context.config.agent, reply_tx)?;
    let mut state = one_shot_state(message, file, session);

    let SendOutcome::Dispatched { request_id } =
        send_message::send_message(&mut state, &transport, now_ms())
    else {
        bail!("nothing to send: provide a message or --file");
    };

    let reply = wait_for_reply(&reply_rx, request_id)?;
    let failed = reply.is_error();
    send_message::apply_reply(&mut state, request_id, reply, now_ms());

    let assistant_name = context.config.ui.assistant_name.as_str();
    for entry in state.transcript().messages() {
        println!("{}", one_shot_line(entry, assistant_name));
    }
    if let Some(session) = state.established_session() {
        eprintln!("session: {session}");
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn one_shot_state(message: &str, file: Option<&Path>, session: Option<String>) -> WidgetState {
    let mut state = WidgetState::default();
    state.set_screen(Screen::Chat);

    for ch in message.chars() {
        state.composer_mut().insert_char(ch);
    }

    if let Some(session) = session {
        state.adopt_session(SessionId::new(session));
    }

    if let Some(file) = file {
        attach::select_file(&mut state, &file.to_string_lossy());
    }

    state
}

fn wait_for_reply(replies: &Receiver<AppEvent>, request_id: u64) -> Result<AgentReply> {
    loop {
        match replies.recv() {
            Ok(AppEvent::AgentReplied {
                request_id: id,
                reply,
            }) if id == request_id => return Ok(reply),
            Ok(_) => continue,
            Err(_) => {
                tracing::error!(
                    code = ONE_SHOT_REPLY_LOST,
                    request_id,
                    "agent transport stopped before replying"
                );
                bail!("agent transport stopped before replying");
            }
        }
    }
}

fn one_shot_line(message: &Message, assistant_name: &str) -> String {
    let author = match message.role {
        Role::User => "you",
        Role::Assistant => assistant_name,
    };
    format!("[{author}] {}", message.text)
}
