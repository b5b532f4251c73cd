use std::sync::Arc;

use services::{
    AnswerOutcome, LoggedHaptics, Navigator, Platform, ProgressOverview, RatioStat, Route,
    ShareMessage, ShareSheet, StoryListItem,
};
use truths_core::model::Story;

/// Navigation has no screen to move in a terminal; the route is logged.
struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        tracing::info!(%route, "navigate");
    }
}

/// Prints the share payload instead of opening a system sheet.
struct TerminalShare;

impl ShareSheet for TerminalShare {
    fn share(&self, message: ShareMessage) {
        println!("Share \"{}\":", message.title);
        println!("  {}", message.message);
    }
}

pub fn platform() -> Platform {
    Platform {
        navigator: Arc::new(TerminalNavigator),
        share: Arc::new(TerminalShare),
        haptics: Arc::new(LoggedHaptics),
    }
}

pub fn print_overview(overview: &ProgressOverview) {
    print_stat("Truth accuracy", &overview.accuracy);
    print_stat("Stories read", &overview.reading);
}

fn print_stat(label: &str, stat: &RatioStat) {
    println!(
        "{label:<15} {:>3}%  {:<7} {}",
        stat.percent(),
        stat.caption(),
        stat.rank
    );
}

pub fn print_list(items: &[StoryListItem]) {
    for item in items {
        let read = if item.is_read { "read" } else { "    " };
        let favorite = if item.is_favorite { "*" } else { " " };
        println!("{favorite} {:>3}  {read}  {}", item.id, item.title);
    }
}

pub fn print_story(story: &Story) {
    println!("{}", story.title());
    println!();
    println!("{}", story.content());
}

pub fn print_answer(outcome: &AnswerOutcome) {
    println!("{} This story is {}.", outcome.headline(), outcome.verdict);
    println!();
    println!("{}", outcome.explanation);
}

pub fn print_saved(stories: &[&Story]) {
    if stories.is_empty() {
        println!("No saved stories yet. Tap the heart on a story to keep it here.");
        return;
    }
    for story in stories {
        println!("{:>3}  {}", story.id(), story.title());
        println!("     {}", story.excerpt());
    }
}
