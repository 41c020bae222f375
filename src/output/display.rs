//! Display functions for command results

use super::formatters::{create_progress_bar, tower_art, tower_line};
use crate::commands::{CheckResult, ClimbResult, SurveyResult};
use crate::game::GameSummary;
use crate::hints::HintOutcome;
use crate::scoring::ScoreBreakdown;
use colored::Colorize;

fn banner(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print the score of a finished session
pub fn print_game_summary(summary: &GameSummary) {
    banner("TOWER COMPLETE");

    println!();
    for line in tower_art(&summary.tower) {
        println!("   {}", line.bright_yellow());
    }

    println!("\n🏗  {}", "Tower:".bright_cyan().bold());
    println!("   Started from:  {}", summary.starting_word.text().to_uppercase());
    println!("   Height:        {}", summary.height);
    println!("   Time:          {}s", summary.elapsed_seconds);
    println!("   Hints used:    {}", summary.hints_used);

    print_score(&summary.score);
}

/// Print a score breakdown, level by level
pub fn print_score(score: &ScoreBreakdown) {
    println!("\n📊 {}", "Score:".bright_cyan().bold());
    for level in &score.breakdown {
        let bonus = if level.letter_bonus > 0 {
            format!(" +{}", level.letter_bonus).magenta().to_string()
        } else {
            String::new()
        };
        println!(
            "   {:2}. {:<12} {} × {:2} = {:4}{bonus}",
            level.level,
            level.word.to_uppercase(),
            level.length,
            level.multiplier,
            level.base_points,
        );
    }

    println!("\n   Base score:    {}", score.base_score);
    println!("   Letter bonus:  {}", score.letter_bonus);
    if score.speed_bonus > 0 {
        println!("   Speed bonus:   {}", score.speed_bonus.to_string().green());
    }
    println!(
        "   {}",
        format!("Total:         {}", score.total_score)
            .bright_yellow()
            .bold()
    );
}

/// Print the verdict for a pair of words
pub fn print_check_result(result: &CheckResult) {
    let base = result.base.text().to_uppercase();
    let candidate = result.candidate.text().to_uppercase();
    match &result.verdict {
        Ok(letter) => println!(
            "{} {candidate} can be built on {base} (added '{}')",
            "✓".green().bold(),
            letter.to_ascii_uppercase()
        ),
        Err(rejection) => println!(
            "{} {candidate} cannot be built on {base}: {rejection}",
            "✗".red().bold()
        ),
    }
}

/// Print a hint or the end-of-tower message
pub fn print_hint(outcome: &HintOutcome) {
    match outcome {
        HintOutcome::Hint(hint) => {
            println!("💡 {}", hint.text.bright_yellow());
            println!(
                "   style: {}, {} possible word{}",
                hint.style,
                hint.candidate_count,
                if hint.candidate_count == 1 { "" } else { "s" }
            );
        }
        HintOutcome::NoMovesAvailable { message, .. } => {
            println!("{}", message.bright_yellow().bold());
        }
    }
}

/// Print the tallest tower found from a word
pub fn print_climb(result: &ClimbResult) {
    banner("TALLEST TOWER");

    println!();
    for line in tower_art(&result.tower) {
        println!("   {}", line.bright_yellow());
    }
    println!("\n   {}", tower_line(&result.tower));
    println!("   Height:      {}", result.tower.len());
    println!("   Search time: {:.2}s", result.duration.as_secs_f64());

    print_score(&result.score);
}

/// Print a height distribution survey
pub fn print_survey(result: &SurveyResult) {
    let report = &result.report;
    banner("TOWER HEIGHT SURVEY");

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!(
        "   Starting words:  {} ({} letters)",
        report.starts, result.starting_length
    );
    println!(
        "   Average height:  {}",
        format!("{:.2}", report.average_height()).bright_yellow().bold()
    );
    println!("   Tallest:         {}", report.best_height);
    println!("   Time taken:      {:.2}s", result.duration.as_secs_f64());

    if report.starts == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for &(height, count) in &report.distribution {
        let pct = (count as f64 / report.starts as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {height:2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }

    let shown: Vec<String> = report
        .best
        .iter()
        .take(10)
        .map(|w| w.to_uppercase())
        .collect();
    println!("\n🏆 {}", "Tallest starts:".bright_cyan().bold());
    println!("   {}", shown.join(", "));
    if report.best.len() > shown.len() {
        println!("   ... and {} more", report.best.len() - shown.len());
    }
}
