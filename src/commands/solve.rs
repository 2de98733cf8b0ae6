use super::CommandContext;
use crate::cli::Commands;
use crate::core::{
    ApproximationParams, DividingParams, LogFactorParams, MultiBranchParams, SubtractiveParams,
};
use crate::io::output::{create_writer, OutputFormat};
use crate::solver::{Recurrence, Solver};
use anyhow::Result;

/// Map a classifier subcommand to its recurrence; `None` for other commands.
pub fn recurrence_from_command(command: &Commands) -> Option<Recurrence> {
    let recurrence = match command {
        Commands::Master { a, b, k } => Recurrence::Master(DividingParams::new(*a, *b, *k)),
        Commands::Extended { a, b, k, i } => {
            Recurrence::ExtendedMaster(LogFactorParams::new(*a, *b, *k, *i))
        }
        Commands::AkraBazzi { a, b, k } => {
            Recurrence::AkraBazzi(MultiBranchParams::new(a.clone(), b.clone(), *k))
        }
        Commands::Subtractive { a, b, k } => {
            Recurrence::Subtractive(SubtractiveParams::new(*a, *b, *k))
        }
        Commands::Approximate { sizes, weights, k } => Recurrence::Approximation(
            ApproximationParams::new(sizes.clone(), weights.clone(), *k),
        ),
        Commands::Catalog | Commands::Init { .. } => return None,
    };
    Some(recurrence)
}

pub fn solve_recurrence(
    recurrence: &Recurrence,
    format: OutputFormat,
    context: &CommandContext,
) -> Result<()> {
    let theorem = recurrence.theorem();
    tracing::debug!(theorem = %theorem, ?recurrence, "classifying recurrence");

    let solver = Solver::new(&context.config);
    let solution = solver.solve(recurrence).map_err(|err| {
        let hint = if err.is_no_convergence() {
            " (try raising root_finding.max_bracket or max_iterations)"
        } else {
            ""
        };
        anyhow::Error::new(err).context(format!(
            "Could not solve the recurrence with the {}{}",
            theorem, hint
        ))
    })?;

    tracing::info!(
        theorem = %theorem,
        case = solution.classification.case,
        complexity = %solution.classification.summary(),
        "recurrence classified"
    );

    let mut writer = create_writer(format, context.formatting);
    writer.write_solution(&solution)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Theorem;

    #[test]
    fn test_recurrence_from_command() {
        let command = Commands::AkraBazzi {
            a: vec![1.0, 1.0],
            b: vec![3.0, 1.5],
            k: 1.0,
        };
        let recurrence = recurrence_from_command(&command).unwrap();
        assert_eq!(recurrence.theorem(), Theorem::AkraBazzi);
        assert_eq!(
            recurrence.render(3),
            "T(n) = T(n/3) + T(n/1.5) + Θ(n^1)"
        );

        assert!(recurrence_from_command(&Commands::Catalog).is_none());
        assert!(recurrence_from_command(&Commands::Init { force: false }).is_none());
    }
}
