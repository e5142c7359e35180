//! Text menu over CalcService.
//!
//! Choices 1-4: tax, CGPA, voting age, exit. Every remote failure is shown
//! to the user and the menu comes back; nothing is retried automatically.

use std::{fmt::Display, io::Write, str::FromStr};

use crate::{error::RpcError, prompt::Prompt, stub::CalcService};

const SUBJECTS: usize = 5;

/// Run the calculator menu until the user exits or input closes.
pub async fn run_calculator_menu<S, P, W>(
    service: &S,
    prompt: &mut P,
    out: &mut W,
) -> std::io::Result<()>
where
    S: CalcService + ?Sized,
    P: Prompt + ?Sized,
    W: Write + ?Sized,
{
    loop {
        writeln!(out, "\n=== Choose Service ===")?;
        writeln!(out, "1. Tax Calculation")?;
        writeln!(out, "2. CGPA Calculation")?;
        writeln!(out, "3. Voting Age Validation")?;
        writeln!(out, "4. Exit")?;
        out.flush()?;

        let Some(choice) = prompt.read_line("Enter choice (1-4): ") else {
            writeln!(out, "Exiting client.")?;
            return Ok(());
        };

        match choice.trim() {
            "1" => tax(service, prompt, out).await?,
            "2" => cgpa(service, prompt, out).await?,
            "3" => voting(service, prompt, out).await?,
            "4" => {
                writeln!(out, "Exiting client.")?;
                return Ok(());
            }
            _ => writeln!(out, "Invalid choice, try again.")?,
        }
    }
}

async fn tax<S, P, W>(service: &S, prompt: &mut P, out: &mut W) -> std::io::Result<()>
where
    S: CalcService + ?Sized,
    P: Prompt + ?Sized,
    W: Write + ?Sized,
{
    let Some(income) = read_number::<f64, _, _>(prompt, out, "Enter income (numeric): ")? else {
        return Ok(());
    };
    match service.calculate_tax(income).await {
        Ok(tax) => writeln!(out, "Calculated tax for income {income:.2} = {tax:.2}"),
        Err(e) => report(out, &e),
    }
}

async fn cgpa<S, P, W>(service: &S, prompt: &mut P, out: &mut W) -> std::io::Result<()>
where
    S: CalcService + ?Sized,
    P: Prompt + ?Sized,
    W: Write + ?Sized,
{
    writeln!(
        out,
        "Enter marks for {SUBJECTS} subjects (0-100). Press Enter after each:"
    )?;
    let mut marks = Vec::with_capacity(SUBJECTS);
    for subject in 1..=SUBJECTS {
        let label = format!("Subject {subject}: ");
        let Some(mark) = read_number::<i32, _, _>(prompt, out, &label)? else {
            return Ok(());
        };
        marks.push(mark);
    }

    match service.calculate_cgpa(marks).await {
        Ok(cgpa) => writeln!(out, "CGPA = {cgpa:.2}"),
        Err(e) => report(out, &e),
    }
}

async fn voting<S, P, W>(service: &S, prompt: &mut P, out: &mut W) -> std::io::Result<()>
where
    S: CalcService + ?Sized,
    P: Prompt + ?Sized,
    W: Write + ?Sized,
{
    let Some(age) = read_number::<i32, _, _>(prompt, out, "Enter age (years): ")? else {
        return Ok(());
    };
    match service.is_eligible_to_vote(age).await {
        Ok(true) => writeln!(out, "Eligible to vote."),
        Ok(false) => writeln!(out, "Not eligible to vote."),
        Err(e) => report(out, &e),
    }
}

/// Read and parse one number; `None` when input closed or did not parse.
fn read_number<T, P, W>(prompt: &mut P, out: &mut W, label: &str) -> std::io::Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
    P: Prompt + ?Sized,
    W: Write + ?Sized,
{
    let Some(line) = prompt.read_line(label) else {
        return Ok(None);
    };
    match line.trim().parse::<T>() {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            writeln!(out, "Invalid number '{}': {}", line.trim(), e)?;
            Ok(None)
        }
    }
}

fn report<W: Write + ?Sized>(out: &mut W, error: &RpcError) -> std::io::Result<()> {
    tracing::warn!("Remote call failed: {}", error);
    writeln!(out, "Error: {error}")
}
