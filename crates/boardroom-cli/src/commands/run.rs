//! Interactive meeting command.
//!
//! Spawns the conversation driver, renders meeting snapshots as they
//! change, and reads user intents from stdin: slash commands for the
//! control surface, anything else is a question to the board.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use boardroom_application::{
    export, load_dataset, summary, ConversationDriver, MeetingSession, SummaryGenerator,
};
use boardroom_core::agent::{default_roster, AgentStatus, ExecutiveRole};
use boardroom_core::config::BoardroomConfig;
use boardroom_core::session::{MeetingState, MeetingStatus, Message};
use boardroom_interaction::{
    ClaudeApiClient, CompletionBackend, CompletionConfig, CompletionError, CompletionRequest,
    SpeechConfig, SpeechSynthesizer,
};

pub struct RunOptions {
    pub topic: Option<String>,
    pub data: String,
    pub ceiling: Option<usize>,
    pub speech: bool,
    pub out_dir: PathBuf,
}

/// Stand-in backend when no API key is configured: every call fails, so
/// the driver's deterministic fallback lines carry the demo.
struct OfflineBackend;

#[async_trait]
impl CompletionBackend for OfflineBackend {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, CompletionError> {
        Err(CompletionError::Transport(
            "no completion API key configured".to_string(),
        ))
    }
}

fn build_backend() -> Arc<dyn CompletionBackend> {
    match CompletionConfig::from_env() {
        Ok(config) => Arc::new(ClaudeApiClient::new(config)),
        Err(_) => {
            eprintln!(
                "{}",
                "ANTHROPIC_API_KEY is not set - executives will use canned lines.".yellow()
            );
            Arc::new(OfflineBackend)
        }
    }
}

fn role_colored(role: ExecutiveRole, text: &str) -> colored::ColoredString {
    match role {
        ExecutiveRole::Ceo => text.blue(),
        ExecutiveRole::Cto => text.green(),
        ExecutiveRole::Cfo => text.yellow(),
        ExecutiveRole::Hr => text.magenta(),
    }
}

fn print_message(message: &Message, state: &MeetingState) {
    let (name, role) = export::author_of(message, state);
    let label = format!("{name} ({role})");
    let label = match message.role {
        Some(role) => role_colored(role, &label).bold(),
        None => label.as_str().bold(),
    };
    println!("{label}: {}", message.text);
}

fn print_status(status: MeetingStatus) {
    let line = match status {
        MeetingStatus::Initializing => "Connecting participants...".dimmed(),
        MeetingStatus::Active => "Meeting in progress - type /help for commands.".dimmed(),
        MeetingStatus::Paused => "Meeting paused - /resume to continue.".yellow(),
        MeetingStatus::Ended => "Meeting ended - /export, /summary or /quit.".red(),
    };
    println!("{line}");
}

fn print_help() {
    println!(
        "{}",
        "Commands: /pause /resume /end /transcript /export /summary /data /help /quit\n\
         Anything else is a question to the boardroom."
            .dimmed()
    );
}

/// Tracks what has already been printed so snapshot re-renders only emit
/// what is new.
struct Renderer {
    printed_messages: usize,
    last_status: Option<MeetingStatus>,
    last_thinker: Option<String>,
}

impl Renderer {
    fn new() -> Self {
        Self {
            printed_messages: 0,
            last_status: None,
            last_thinker: None,
        }
    }

    fn render(&mut self, state: &MeetingState) {
        if self.last_status != Some(state.status) {
            print_status(state.status);
            self.last_status = Some(state.status);
        }

        for message in &state.messages[self.printed_messages..] {
            print_message(message, state);
        }
        self.printed_messages = state.messages.len();

        let thinker = state
            .agents
            .iter()
            .find(|a| a.status == AgentStatus::Thinking)
            .map(|a| a.name.clone());
        if let Some(name) = &thinker {
            if self.last_thinker.as_deref() != Some(name) {
                println!("{}", format!("... {name} is thinking").dimmed());
            }
        }
        self.last_thinker = thinker;
    }
}

fn spawn_speech(
    synth: &Option<Arc<SpeechSynthesizer>>,
    state: &MeetingState,
    out_dir: &std::path::Path,
    printed_before: usize,
) {
    let Some(synth) = synth else { return };
    for (index, message) in state.messages.iter().enumerate().skip(printed_before) {
        let Some(role) = message.role else { continue };
        let synth = synth.clone();
        let text = message.text.clone();
        let path = out_dir.join(format!("speech-{index:03}.mp3"));
        tokio::spawn(async move {
            match synth.synthesize(&text, role).await {
                Ok(bytes) => {
                    if let Err(err) = std::fs::write(&path, bytes) {
                        eprintln!("{}", format!("Speech error: {err}").yellow());
                    }
                }
                // non-blocking notice; the meeting goes on
                Err(err) => eprintln!("{}", format!("Speech error: {err}").yellow()),
            }
        });
    }
}

enum Intent {
    Continue,
    Quit,
}

async fn handle_line(
    line: &str,
    session: &MeetingSession,
    generator: &SummaryGenerator,
    dataset: &boardroom_core::data::BusinessData,
    out_dir: &std::path::Path,
) -> Intent {
    let line = line.trim();
    match line {
        "" => Intent::Continue,
        "/help" => {
            print_help();
            Intent::Continue
        }
        "/pause" => {
            if session.snapshot().status == MeetingStatus::Active {
                session.pause_resume();
            }
            Intent::Continue
        }
        "/resume" => {
            if session.snapshot().status == MeetingStatus::Paused {
                session.pause_resume();
            }
            Intent::Continue
        }
        "/end" => {
            session.end_meeting();
            Intent::Continue
        }
        "/transcript" => {
            session.toggle_transcript();
            let state = session.snapshot();
            if state.transcript_visible {
                println!("{}", "--- transcript ---".dimmed());
                println!("{}", export::format_transcript(&state));
                println!("{}", "------------------".dimmed());
            } else {
                println!("{}", "Transcript hidden.".dimmed());
            }
            Intent::Continue
        }
        "/export" => {
            match export::write_transcript(out_dir, &session.snapshot()) {
                Ok(path) => println!("Transcript exported to {}", path.display()),
                Err(err) => eprintln!("{}", format!("Export failed: {err}").red()),
            }
            Intent::Continue
        }
        "/summary" => {
            println!("{}", "Generating decision summary...".dimmed());
            let state = session.snapshot();
            let topic = state.discussion_topic.clone();
            let decision = generator.generate(&state, topic.as_deref()).await;
            println!("{}", summary::render_markdown(&decision, topic.as_deref()));
            match summary::write_summary(out_dir, &decision, topic.as_deref()) {
                Ok(path) => println!("Summary exported to {}", path.display()),
                Err(err) => eprintln!("{}", format!("Export failed: {err}").red()),
            }
            Intent::Continue
        }
        "/data" => {
            super::data::print_overview(dataset);
            Intent::Continue
        }
        "/quit" => {
            session.end_meeting();
            Intent::Quit
        }
        question => {
            if !session.ask_question(question) {
                println!("{}", "The meeting has ended; questions are closed.".dimmed());
            }
            Intent::Continue
        }
    }
}

pub async fn execute(options: RunOptions) -> Result<()> {
    let mut config = BoardroomConfig::load()?;
    if let Some(ceiling) = options.ceiling {
        config.meeting.message_ceiling = ceiling;
    }

    let dataset = load_dataset(&options.data)?;
    std::fs::create_dir_all(&options.out_dir)
        .with_context(|| format!("cannot create {}", options.out_dir.display()))?;

    let backend = build_backend();
    let generator = SummaryGenerator::new(backend.clone(), config.completion.clone());

    let synth = if options.speech {
        let synth = SpeechSynthesizer::from_config(SpeechConfig {
            endpoint: config.speech.endpoint.clone(),
            api_key: std::env::var("BOARDROOM_SPEECH_KEY").ok(),
        });
        if !synth.is_enabled() {
            eprintln!(
                "{}",
                "Speech requested but no endpoint/key configured - staying silent.".yellow()
            );
            None
        } else {
            Some(Arc::new(synth))
        }
    } else {
        None
    };

    println!(
        "{} - Executive Meeting",
        dataset.company_name.bold().underline()
    );
    print_help();

    let session = MeetingSession::new(default_roster());
    session.start_discussion(options.topic.clone());
    let roster = session.snapshot().agents;
    session.receive_message(Message::opening(&roster[0], options.topic.as_deref()));

    let driver = ConversationDriver::new(
        session.clone(),
        &dataset,
        backend,
        config.completion.clone(),
        config.meeting.clone(),
    );
    let mut driver_handle = Some(tokio::spawn(driver.run()));

    let mut renderer = Renderer::new();
    let mut rx = session.subscribe();
    renderer.render(&rx.borrow().clone());

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = rx.borrow_and_update().clone();
                let printed_before = renderer.printed_messages;
                renderer.render(&state);
                spawn_speech(&synth, &state, &options.out_dir, printed_before);
            }
            finished = async { driver_handle.as_mut().unwrap().await }, if driver_handle.is_some() => {
                driver_handle = None;
                finished.context("conversation driver panicked")?;
                if session.snapshot().status != MeetingStatus::Ended {
                    println!(
                        "{}",
                        "The conversation has concluded - /summary, /export or /quit.".dimmed()
                    );
                }
            }
            line = lines.next_line() => {
                match line.context("stdin read failed")? {
                    None => {
                        session.end_meeting();
                        break;
                    }
                    Some(line) => {
                        let intent = handle_line(
                            &line,
                            &session,
                            &generator,
                            &dataset,
                            &options.out_dir,
                        )
                        .await;
                        if matches!(intent, Intent::Quit) {
                            break;
                        }
                    }
                }
            }
        }
    }

    if let Some(handle) = driver_handle {
        handle.await.context("conversation driver panicked")?;
    }
    Ok(())
}
