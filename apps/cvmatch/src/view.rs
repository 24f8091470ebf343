//! Plain-text rendering for the terminal. Every function returns a `String` so the
//! command layer decides where it goes.

use std::fmt::Write;

use crate::admin::matches::MatchTable;
use crate::chatbot::{ChatMessage, Sender};
use crate::listing::MatchBand;
use crate::models::candidate::AdminCandidate;
use crate::models::job::{JobPosting, MatchResult};
use crate::models::job_match::AdminJobMatch;
use crate::upload::{MatchSource, ResultsHandoff};

pub fn results(handoff: &ResultsHandoff) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Candidate #{}", handoff.candidate_id);
    let _ = writeln!(
        out,
        "Matched {} ({})",
        handoff.match_date.format("%Y-%m-%d %H:%M UTC"),
        match handoff.source {
            MatchSource::Server => "server matching",
            MatchSource::Client => "estimated locally",
        }
    );
    let _ = writeln!(out, "Skills: {}", join_or_dash(&handoff.skills));
    let _ = writeln!(out, "Experience: {} year(s)", handoff.experience);

    match &handoff.top_match {
        Some(top) => {
            let _ = writeln!(out, "\nTop match: {}", match_line(top));
        }
        None => {
            let _ = writeln!(out, "\nNo matching jobs found.");
        }
    }

    if !handoff.jobs.is_empty() {
        let _ = writeln!(out, "\nAll matches:");
        for job in &handoff.jobs {
            let _ = writeln!(out, "  {}", match_line(job));
            if !job.matching_skills.is_empty() {
                let _ = writeln!(out, "      matching: {}", job.matching_skills.join(", "));
            }
        }
    }
    out
}

pub fn match_line(m: &MatchResult) -> String {
    format!(
        "#{} {} @ {} [{}% {}]",
        m.job.id,
        m.job.title,
        m.job.company,
        m.match_score,
        MatchBand::for_score(m.match_score).label()
    )
}

pub fn job_board(jobs: &[JobPosting]) -> String {
    if jobs.is_empty() {
        return "No jobs posted.\n".to_string();
    }

    let mut out = String::new();
    for job in jobs {
        let _ = write!(out, "#{} {} @ {}", job.id, job.title, job.company);
        if let Some(score) = job.match_score {
            let _ = write!(out, " [{}% {}]", score, MatchBand::for_score(score).label());
        }
        let _ = writeln!(out);

        let details: Vec<&str> = [job.job_type.as_deref(), job.location.as_deref(), job.salary_range.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();
        if !details.is_empty() {
            let _ = writeln!(out, "    {}", details.join(" | "));
        }
        let _ = writeln!(
            out,
            "    requires: {} ({}+ yrs)",
            join_or_dash(&job.required_skills),
            job.experience_required
        );
    }
    out
}

pub fn candidates(rows: &[&AdminCandidate]) -> String {
    if rows.is_empty() {
        return "No candidates found.\n".to_string();
    }

    let mut out = String::new();
    for c in rows {
        let _ = writeln!(
            out,
            "#{} {} <{}> {}",
            c.id,
            c.full_name(),
            c.email,
            c.phone.as_deref().unwrap_or("-")
        );
        let _ = writeln!(out, "    skills: {}", join_or_dash(&c.skill_list()));
    }
    out
}

pub fn job_matches(table: &MatchTable<'_>, rows: &[&AdminJobMatch]) -> String {
    if rows.is_empty() {
        return "No matches found.\n".to_string();
    }

    let mut out = String::new();
    for m in rows {
        let who = table
            .candidate(m)
            .map(|c| c.full_name())
            .unwrap_or_else(|| m.candidate_id.clone());
        let job = table
            .job(m)
            .map(|j| format!("{} @ {}", j.title, j.company))
            .unwrap_or_else(|| format!("job #{}", m.job_id));
        let _ = writeln!(
            out,
            "#{} {:>5.1}%  {} -> {}{}",
            m.id,
            m.match_percentage,
            who,
            job,
            m.created_at
                .as_deref()
                .map(|at| format!("  ({at})"))
                .unwrap_or_default()
        );
    }
    out
}

pub fn chat_message(message: &ChatMessage) -> String {
    let who = match message.sender {
        Sender::User => "you",
        Sender::Bot => "bot",
    };
    format!("[{}] {}: {}", message.time.format("%H:%M"), who, message.text)
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}
