use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use strum::IntoEnumIterator;

use fitcoach_application::{ChatUseCase, PlannerUseCase, RuleBasedAdvisor};
use fitcoach_core::advisor::quick_actions;
use fitcoach_core::planner::{
    FitnessGoal, FitnessLevel, Gender, ProfileDelta, TimeBudget, WizardStep, WorkoutPlan,
    WorkoutType,
};
use fitcoach_core::session::{ChatMessage, MessageRole};

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: vec![
                "/plan".to_string(),
                "/history".to_string(),
                "/quit".to_string(),
            ],
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// Prints one transcript message with role coloring.
fn print_message(message: &ChatMessage) {
    match message.role {
        MessageRole::User => {
            println!("{}", format!("> {}", message.text).green());
        }
        MessageRole::Assistant => {
            for line in message.text.lines() {
                println!("{}", line.bright_blue());
            }
        }
    }
}

/// Prints an assistant message's follow-up suggestions as a numbered
/// list the user can pick from by typing the number.
fn print_suggestions(suggestions: &[String]) {
    if suggestions.is_empty() {
        return;
    }
    println!("{}", "Suggested questions:".bright_black());
    for (i, suggestion) in suggestions.iter().enumerate() {
        println!("{}", format!("  {}. {}", i + 1, suggestion).cyan());
    }
}

/// Reads one trimmed line, returning None on ctrl-c/ctrl-d or blank.
fn prompt(rl: &mut Editor<CliHelper, rustyline::history::DefaultHistory>, label: &str) -> Option<String> {
    match rl.readline(&format!("{} ", label)) {
        Ok(line) => {
            let trimmed = line.trim().to_string();
            if trimmed.is_empty() { None } else { Some(trimmed) }
        }
        Err(_) => None,
    }
}

/// Prompts until the input parses, or returns None on blank input.
fn prompt_parsed<T: std::str::FromStr>(
    rl: &mut Editor<CliHelper, rustyline::history::DefaultHistory>,
    label: &str,
) -> Option<T> {
    loop {
        let line = prompt(rl, label)?;
        match line.parse::<T>() {
            Ok(value) => return Some(value),
            Err(_) => println!("{}", "Please enter a valid number.".yellow()),
        }
    }
}

/// Prompts for a selection out of a numbered menu of variants.
fn prompt_choice<T: Copy>(
    rl: &mut Editor<CliHelper, rustyline::history::DefaultHistory>,
    label: &str,
    options: &[(T, &'static str)],
) -> Option<T> {
    for (i, (_, name)) in options.iter().enumerate() {
        println!("  {}. {}", i + 1, name);
    }
    loop {
        let pick: usize = prompt_parsed(rl, label)?;
        if (1..=options.len()).contains(&pick) {
            return Some(options[pick - 1].0);
        }
        println!("{}", "Out of range.".yellow());
    }
}

/// Prompts for a comma-separated multi-selection out of a numbered menu.
fn prompt_multi_choice<T: Copy>(
    rl: &mut Editor<CliHelper, rustyline::history::DefaultHistory>,
    label: &str,
    options: &[(T, &'static str)],
) -> Option<Vec<T>> {
    for (i, (_, name)) in options.iter().enumerate() {
        println!("  {}. {}", i + 1, name);
    }
    loop {
        let line = prompt(rl, label)?;
        let picks: Vec<usize> = line
            .split(',')
            .filter_map(|part| part.trim().parse::<usize>().ok())
            .filter(|pick| (1..=options.len()).contains(pick))
            .collect();
        if !picks.is_empty() {
            return Some(picks.iter().map(|&pick| options[pick - 1].0).collect());
        }
        println!("{}", "Enter one or more numbers, comma separated.".yellow());
    }
}

/// Renders a generated plan.
fn print_plan(plan: &WorkoutPlan) {
    println!();
    println!("{}", "🎉 Your Personalized Workout Plan".bright_magenta().bold());
    println!(
        "{}  {}",
        plan.name.bold(),
        format!("[{} min | {}]", plan.duration_minutes, plan.difficulty.label()).bright_black()
    );
    println!("{}", plan.description.bright_black());
    println!(
        "{} {}",
        "Target muscles:".bright_black(),
        plan.target_muscles.join(", ")
    );
    println!();
    for exercise in &plan.exercises {
        println!(
            "  {} — {} sets x {} ({}s rest)",
            exercise.name.bold(),
            exercise.sets,
            exercise.reps,
            exercise.rest_seconds
        );
        println!("    {}", exercise.instruction.bright_black());
    }
    println!();
}

/// Runs the plan wizard until the user leaves it.
async fn run_plan_wizard(
    rl: &mut Editor<CliHelper, rustyline::history::DefaultHistory>,
    planner: &PlannerUseCase,
) {
    loop {
        let step = planner.step().await;
        println!();
        println!(
            "{}",
            format!("— Workout Planner: step {}/4 ({}) —", step.number(), step.name())
                .bright_magenta()
        );

        match step {
            WizardStep::Profile => {
                println!("{}", "Tell us about yourself to create the perfect workout plan.".bright_black());
                let Some(age) = prompt_parsed::<u32>(rl, "Age:") else { return };
                let Some(weight) = prompt_parsed::<f32>(rl, "Weight (kg):") else { return };
                let Some(height) = prompt_parsed::<f32>(rl, "Height (cm):") else { return };
                let genders: Vec<(Gender, &'static str)> =
                    Gender::iter().map(|g| (g, g.label())).collect();
                let Some(gender) = prompt_choice(rl, "Gender:", &genders) else { return };
                let levels: Vec<(FitnessLevel, &'static str)> =
                    FitnessLevel::iter().map(|l| (l, level_label(l))).collect();
                let Some(level) = prompt_choice(rl, "Fitness level:", &levels) else { return };

                planner
                    .apply(ProfileDelta {
                        age: Some(age),
                        weight_kg: Some(weight),
                        height_cm: Some(height),
                        gender: Some(gender),
                        fitness_level: Some(level),
                        ..ProfileDelta::default()
                    })
                    .await;
                planner.advance().await;
            }
            WizardStep::Goals => {
                println!("{}", "What do you want to achieve? (Select all that apply)".bright_black());
                let goals: Vec<(FitnessGoal, &'static str)> =
                    FitnessGoal::iter().map(|g| (g, g.label())).collect();
                let Some(selected) = prompt_multi_choice(rl, "Goals:", &goals) else { return };

                planner
                    .apply(ProfileDelta {
                        goals: Some(selected),
                        ..ProfileDelta::default()
                    })
                    .await;
                planner.advance().await;
            }
            WizardStep::Preferences => {
                println!("{}", "Choose your preferred workout types and time availability.".bright_black());
                let times: Vec<(TimeBudget, &'static str)> =
                    TimeBudget::iter().map(|t| (t, t.label())).collect();
                let Some(time) = prompt_choice(rl, "Available time per session:", &times) else {
                    return;
                };
                let workouts: Vec<(WorkoutType, &'static str)> =
                    WorkoutType::iter().map(|w| (w, w.label())).collect();
                let Some(selected) = prompt_multi_choice(rl, "Workout types:", &workouts) else {
                    return;
                };

                planner
                    .apply(ProfileDelta {
                        available_time: Some(time),
                        preferred_workouts: Some(selected),
                        ..ProfileDelta::default()
                    })
                    .await;

                println!("{}", "⚡ Generating plan...".yellow());
                planner.advance().await;
            }
            WizardStep::Plan { plan } => {
                print_plan(&plan);
                println!(
                    "{}",
                    "[s]tart workout, [m]odify plan, or [d]one".bright_black()
                );
                match prompt(rl, ">").as_deref() {
                    Some("m") => {
                        planner.back().await;
                    }
                    Some("s") => {
                        println!("{}", "Starting workout! Good luck! 💪".bright_green());
                        return;
                    }
                    _ => return,
                }
            }
        }
    }
}

fn level_label(level: FitnessLevel) -> &'static str {
    match level {
        FitnessLevel::Beginner => "Beginner - New to fitness",
        FitnessLevel::Intermediate => "Intermediate - Some experience",
        FitnessLevel::Advanced => "Advanced - Very experienced",
    }
}

/// The main entry point for the FitCoach REPL.
///
/// Sets up a rustyline-based chat loop over the advisory engine:
/// free text goes to the intent matcher, `/plan` enters the workout
/// planner wizard, and typing a suggestion's number pre-fills the next
/// prompt with its text (it is not auto-submitted).
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // ===== Backend Initialization =====
    let chat = Arc::new(ChatUseCase::new(Arc::new(RuleBasedAdvisor::new())));
    let planner = PlannerUseCase::new();

    // ===== REPL Setup =====
    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== FitCoach ===".bright_magenta().bold());
    println!(
        "{}",
        "Ask me about nutrition, workouts, or health goals. '/plan' starts the workout planner, '/history' shows the transcript, '/quit' exits."
            .bright_black()
    );
    println!(
        "{} {}",
        "Quick actions:".bright_black(),
        quick_actions().join(" | ").cyan()
    );
    println!();

    // Show the greeting the session opened with.
    let mut last_suggestions: Vec<String> = Vec::new();
    if let Some(greeting) = chat.last_message().await {
        print_message(&greeting);
        print_suggestions(&greeting.suggestions);
        last_suggestions = greeting.suggestions.clone();
    }

    // A suggestion picked by number becomes the next prompt's initial
    // text; the user can still edit before submitting.
    let mut pending_input = String::new();

    // ===== Main REPL Loop =====
    loop {
        let readline = rl.readline_with_initial(">> ", (pending_input.as_str(), ""));
        pending_input.clear();

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                // Handle quit command
                if trimmed == "/quit" || trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                // Skip empty lines
                if trimmed.is_empty() {
                    continue;
                }

                // Add to history
                let _ = rl.add_history_entry(&line);

                if trimmed == "/plan" {
                    run_plan_wizard(&mut rl, &planner).await;
                    continue;
                }

                if trimmed == "/history" {
                    for message in chat.history().await {
                        print_message(&message);
                    }
                    continue;
                }

                // A bare number picks the corresponding suggestion.
                if let Ok(pick) = trimmed.parse::<usize>() {
                    if (1..=last_suggestions.len()).contains(&pick) {
                        pending_input = last_suggestions[pick - 1].clone();
                        continue;
                    }
                }

                // Free text goes to the advisor. Input is blocked while
                // the reply is composed (we simply await it here).
                println!("{}", "coach is typing...".bright_black().italic());
                if let Err(e) = chat.submit(trimmed).await {
                    eprintln!("{}", format!("{}", e).red());
                    continue;
                }

                if let Some(reply) = chat.last_message().await {
                    print_message(&reply);
                    print_suggestions(&reply.suggestions);
                    last_suggestions = reply.suggestions.clone();
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type '/quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
