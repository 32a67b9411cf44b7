//! Line-oriented command shell.
//!
//! A [`Shell`] reads one command per line, runs it against its
//! [`Workbench`], and writes a plain-text result. Failed commands print an
//! `error:` line and the session continues; only `quit`/`exit` or the end of
//! input end it.
//!
//! ```
//! use resoil::shell::{Shell, ShellOptions};
//!
//! let script = "\
//! spring \"Spring A\" 200 0.1 0.02 0.02 0.03
//! frequency 1
//! ";
//! let mut out = Vec::new();
//! Shell::new(ShellOptions::default())
//!     .run(script.as_bytes(), &mut out, false)
//!     .unwrap();
//!
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("f_n = 2.2508 Hz"));
//! ```

use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use log::{debug, info, warn};
use thiserror::Error;
use uom::si::{
    angular_velocity::radian_per_second,
    diffusion_coefficient::centistokes,
    dynamic_viscosity::pascal_second,
    f64::{AngularVelocity, Length, Mass, MassDensity, ThermodynamicTemperature},
    force::newton,
    frequency::hertz,
    length::meter,
    mass::kilogram,
    mass_density::gram_per_cubic_centimeter,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

use crate::{
    models::suspension::{
        Damper, DamperParameters, DamperParametersError, DampingRegime, DynamicsError, PLOT_SIZE,
        ResponseError, Selection, SelectionConfig, SelectionError, SelectionInput, Spring,
        SpringParameters, SpringParametersError, select,
    },
    session::{SessionError, Workbench},
    support::{
        catalog::{Catalog, CatalogError},
        plot::PlotError,
        units::{KinematicViscosity, newton_per_meter, newton_second_per_meter},
    },
};

/// Springs catalog looked up in the working directory when none is given.
pub const DEFAULT_SPRINGS_PATH: &str = "Resortes_resoil.csv";

/// Oils catalog looked up in the working directory when none is given.
pub const DEFAULT_OILS_PATH: &str = "Aceites_resoil.csv";

// Values used when a calculation command leaves an argument out.
const DEFAULT_DEFLECTION: f64 = 0.01;
const DEFAULT_MASS: f64 = 1.0;
const DEFAULT_TEMPERATURE: f64 = 40.0;
const DEFAULT_STIFFNESS: f64 = 200.0;
const DEFAULT_FACTOR: f64 = 1.0;
const DEFAULT_DAMPING: f64 = 10.0;

const HELP: &str = "\
commands:
  spring [<name> <k N/m> <free length m> <max deflection m> <d_in m> <d_out m>]
  force [deflection m = 0.01]
  limits [deflection m = 0.01]
  frequency [mass kg = 1]
  omega [mass kg = 1]
  damper [<name> <density g/cm³> <ν40 cSt> <ν100 cSt>]
  viscosity [temperature °C = 40]
  coefficient [mass kg = 1] [k N/m = 200] [factor = 1]
  ratio [mass kg = 1] [k N/m = 200] [c N·s/m = 10]
  select <ωn rad/s> <mass kg> <amplitude m>
  save <file.png>
  export <file.csv>
  show
  demo
  help
  quit | exit
`spring` and `damper` without arguments load the reference components
names with spaces can be double-quoted; `#` starts a comment";

/// Errors reported by a shell command.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("unknown command `{0}`; type `help` for a list")]
    UnknownCommand(String),

    #[error("usage: {usage}")]
    Usage { usage: &'static str },

    #[error("invalid {field}: `{input}` is not a number")]
    Parse { field: &'static str, input: String },

    #[error("unterminated quote")]
    UnterminatedQuote,

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("invalid spring")]
    Spring(#[from] SpringParametersError),

    #[error("invalid damper")]
    Damper(#[from] DamperParametersError),

    #[error(transparent)]
    Dynamics(#[from] DynamicsError),

    #[error("selection failed")]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("cannot save plot")]
    Plot(#[from] PlotError),

    #[error(transparent)]
    Response(#[from] ResponseError),

    /// Writing to the shell output failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// What the caller should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Where the shell finds its catalogs and how it searches them.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellOptions {
    pub springs_path: PathBuf,
    pub oils_path: PathBuf,
    pub config: SelectionConfig,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            springs_path: PathBuf::from(DEFAULT_SPRINGS_PATH),
            oils_path: PathBuf::from(DEFAULT_OILS_PATH),
            config: SelectionConfig::default(),
        }
    }
}

/// An interactive session.
#[derive(Debug)]
pub struct Shell {
    options: ShellOptions,
    workbench: Workbench,
    last_selection: Option<Selection>,
}

impl Shell {
    #[must_use]
    pub fn new(options: ShellOptions) -> Self {
        Self {
            options,
            workbench: Workbench::new(),
            last_selection: None,
        }
    }

    #[must_use]
    pub fn workbench(&self) -> &Workbench {
        &self.workbench
    }

    /// The result of the most recent successful `select`, if any.
    #[must_use]
    pub fn last_selection(&self) -> Option<&Selection> {
        self.last_selection.as_ref()
    }

    /// Reads commands from `input` until it ends or a `quit` command.
    ///
    /// With `prompt` set, a prompt is written before each line is read.
    ///
    /// # Errors
    ///
    /// Returns an I/O error only if reading input or writing output fails;
    /// command failures are written to `out` and the loop continues.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut out: W,
        prompt: bool,
    ) -> io::Result<()> {
        let mut lines = input.lines();

        loop {
            if prompt {
                write!(out, "resoil> ")?;
                out.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };

            match self.execute(&line?, &mut out) {
                Ok(Outcome::Continue) => {}
                Ok(Outcome::Quit) => break,
                Err(ShellError::Io(err)) => return Err(err),
                Err(err) => {
                    let message = report(&err);
                    warn!("{message}");
                    writeln!(out, "error: {message}")?;
                }
            }
        }

        Ok(())
    }

    /// Runs a single command line.
    ///
    /// Blank lines and comments do nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError`] describing why the command failed. The
    /// workbench is left unchanged by a failed command.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Outcome, ShellError> {
        let tokens = tokenize(line)?;
        let Some((command, args)) = tokens.split_first() else {
            return Ok(Outcome::Continue);
        };
        debug!("running `{command}` with {} argument(s)", args.len());

        match command.as_str() {
            "spring" => self.create_spring(args, out)?,
            "force" => self.force(args, out)?,
            "limits" => self.limits(args, out)?,
            "frequency" => self.frequency(args, out)?,
            "omega" => self.omega(args, out)?,
            "damper" => self.create_damper(args, out)?,
            "viscosity" => self.viscosity(args, out)?,
            "coefficient" => self.coefficient(args, out)?,
            "ratio" => self.ratio(args, out)?,
            "select" => self.select(args, out)?,
            "save" => self.save(args, out)?,
            "export" => self.export(args, out)?,
            "show" => self.show(args, out)?,
            "demo" => {
                arity(args, 0, 0, "demo")?;
                write_demo(&mut *out)?;
            }
            "help" => writeln!(out, "{HELP}")?,
            "quit" | "exit" => return Ok(Outcome::Quit),
            other => return Err(ShellError::UnknownCommand(other.to_owned())),
        }

        Ok(Outcome::Continue)
    }

    fn create_spring<W: Write>(&mut self, args: &[String], out: &mut W) -> Result<(), ShellError> {
        let parameters = match args {
            [] => SpringParameters::default(),
            [name, k, free, max, inner, outer] => SpringParameters {
                name: name.clone(),
                stiffness: newton_per_meter(number("stiffness", k)?),
                free_length: Length::new::<meter>(number("free length", free)?),
                max_deflection: Length::new::<meter>(number("maximum deflection", max)?),
                inner_diameter: Length::new::<meter>(number("inner diameter", inner)?),
                outer_diameter: Length::new::<meter>(number("outer diameter", outer)?),
            },
            _ => {
                return Err(ShellError::Usage {
                    usage: "spring [<name> <k N/m> <free length m> <max deflection m> <d_in m> <d_out m>]",
                });
            }
        };
        let spring = Spring::new(parameters)?;

        writeln!(out, "{spring}")?;
        info!("spring set to '{}'", spring.name());
        if let Some(previous) = self.workbench.set_spring(spring) {
            writeln!(out, "replaced spring '{}'", previous.name())?;
        }
        Ok(())
    }

    fn force<W: Write>(&self, args: &[String], out: &mut W) -> Result<(), ShellError> {
        let spring = self.workbench.spring()?;
        arity(args, 0, 1, "force [deflection m]")?;
        let deflection = Length::new::<meter>(number_or("deflection", args, 0, DEFAULT_DEFLECTION)?);

        let force = spring.force(deflection);
        writeln!(out, "F = {:.6} N", force.get::<newton>())?;
        Ok(())
    }

    fn limits<W: Write>(&self, args: &[String], out: &mut W) -> Result<(), ShellError> {
        let spring = self.workbench.spring()?;
        arity(args, 0, 1, "limits [deflection m]")?;
        let deflection = Length::new::<meter>(number_or("deflection", args, 0, DEFAULT_DEFLECTION)?);

        let max = spring.max_deflection().get::<meter>();
        if spring.within_limits(deflection) {
            writeln!(out, "within limits (max deflection {max} m)")?;
        } else {
            writeln!(out, "exceeds max deflection of {max} m")?;
        }
        Ok(())
    }

    fn frequency<W: Write>(&self, args: &[String], out: &mut W) -> Result<(), ShellError> {
        let spring = self.workbench.spring()?;
        arity(args, 0, 1, "frequency [mass kg]")?;
        let mass = Mass::new::<kilogram>(number_or("mass", args, 0, DEFAULT_MASS)?);

        let f = spring.natural_frequency(mass)?;
        writeln!(out, "f_n = {:.4} Hz", f.get::<hertz>())?;
        Ok(())
    }

    fn omega<W: Write>(&self, args: &[String], out: &mut W) -> Result<(), ShellError> {
        let spring = self.workbench.spring()?;
        arity(args, 0, 1, "omega [mass kg]")?;
        let mass = Mass::new::<kilogram>(number_or("mass", args, 0, DEFAULT_MASS)?);

        let omega = spring.natural_angular_frequency(mass)?;
        writeln!(out, "ω_n = {:.4} rad/s", omega.get::<radian_per_second>())?;
        Ok(())
    }

    fn create_damper<W: Write>(&mut self, args: &[String], out: &mut W) -> Result<(), ShellError> {
        let parameters = match args {
            [] => DamperParameters::default(),
            [name, density, nu_40, nu_100] => DamperParameters {
                name: name.clone(),
                density: MassDensity::new::<gram_per_cubic_centimeter>(number("density", density)?),
                viscosity_40: KinematicViscosity::new::<centistokes>(number(
                    "viscosity at 40 °C",
                    nu_40,
                )?),
                viscosity_100: KinematicViscosity::new::<centistokes>(number(
                    "viscosity at 100 °C",
                    nu_100,
                )?),
            },
            _ => {
                return Err(ShellError::Usage {
                    usage: "damper [<name> <density g/cm³> <ν40 cSt> <ν100 cSt>]",
                });
            }
        };
        let damper = Damper::new(parameters)?;

        writeln!(out, "{damper}")?;
        info!("damper set to '{}'", damper.name());
        if let Some(previous) = self.workbench.set_damper(damper) {
            writeln!(out, "replaced damper '{}'", previous.name())?;
        }
        Ok(())
    }

    fn viscosity<W: Write>(&self, args: &[String], out: &mut W) -> Result<(), ShellError> {
        let damper = self.workbench.damper()?;
        arity(args, 0, 1, "viscosity [temperature °C]")?;
        let celsius = number_or("temperature", args, 0, DEFAULT_TEMPERATURE)?;

        let eta = damper.dynamic_viscosity(ThermodynamicTemperature::new::<degree_celsius>(celsius));
        writeln!(out, "η({celsius} °C) = {:.6} Pa·s", eta.get::<pascal_second>())?;
        Ok(())
    }

    fn coefficient<W: Write>(&self, args: &[String], out: &mut W) -> Result<(), ShellError> {
        let damper = self.workbench.damper()?;
        arity(args, 0, 3, "coefficient [mass kg] [k N/m] [factor]")?;
        let mass = Mass::new::<kilogram>(number_or("mass", args, 0, DEFAULT_MASS)?);
        let stiffness = newton_per_meter(number_or("stiffness", args, 1, DEFAULT_STIFFNESS)?);
        let factor = number_or("factor", args, 2, DEFAULT_FACTOR)?;

        let c = damper.critical_damping_coefficient(mass, stiffness, factor)?;
        writeln!(out, "c = {:.4} N·s/m (factor {factor})", c.value)?;
        Ok(())
    }

    fn ratio<W: Write>(&self, args: &[String], out: &mut W) -> Result<(), ShellError> {
        let damper = self.workbench.damper()?;
        arity(args, 0, 3, "ratio [mass kg] [k N/m] [c N·s/m]")?;
        let mass = Mass::new::<kilogram>(number_or("mass", args, 0, DEFAULT_MASS)?);
        let stiffness = newton_per_meter(number_or("stiffness", args, 1, DEFAULT_STIFFNESS)?);
        let coefficient = newton_second_per_meter(number_or(
            "damping coefficient",
            args,
            2,
            DEFAULT_DAMPING,
        )?);

        let zeta = damper.damping_ratio(mass, stiffness, coefficient)?;
        writeln!(
            out,
            "ζ = {:.4} ({})",
            zeta.get::<ratio>(),
            DampingRegime::classify(zeta)
        )?;
        Ok(())
    }

    fn select<W: Write>(&mut self, args: &[String], out: &mut W) -> Result<(), ShellError> {
        arity(args, 3, 3, "select <ωn rad/s> <mass kg> <amplitude m>")?;
        let input = SelectionInput::new(
            AngularVelocity::new::<radian_per_second>(number("angular frequency", &args[0])?),
            Mass::new::<kilogram>(number("mass", &args[1])?),
            Length::new::<meter>(number("amplitude", &args[2])?),
        )?;

        let springs = Catalog::from_path(&self.options.springs_path)?;
        let oils = Catalog::from_path(&self.options.oils_path)?;
        let selection = select(&springs, &oils, &input, &self.options.config)?;

        writeln!(out, "{selection}")?;
        writeln!(
            out,
            "response: {} samples over {} s; `save <file.png>` or `export <file.csv>` to keep it",
            selection.response.len(),
            self.options.config.horizon_seconds
        )?;
        self.last_selection = Some(selection);
        Ok(())
    }

    fn save<W: Write>(&self, args: &[String], out: &mut W) -> Result<(), ShellError> {
        arity(args, 1, 1, "save <file.png>")?;
        let Some(selection) = &self.last_selection else {
            return nothing_to_save(out);
        };

        let path = Path::new(&args[0]);
        selection.response.save_png(path, PLOT_SIZE)?;
        info!("saved response plot to {}", path.display());
        writeln!(out, "saved plot to {}", path.display())?;
        Ok(())
    }

    fn export<W: Write>(&self, args: &[String], out: &mut W) -> Result<(), ShellError> {
        arity(args, 1, 1, "export <file.csv>")?;
        let Some(selection) = &self.last_selection else {
            return nothing_to_save(out);
        };

        let path = Path::new(&args[0]);
        selection.response.save_csv(path)?;
        info!("exported response samples to {}", path.display());
        writeln!(out, "exported {} samples to {}", selection.response.len(), path.display())?;
        Ok(())
    }

    fn show<W: Write>(&self, args: &[String], out: &mut W) -> Result<(), ShellError> {
        arity(args, 0, 0, "show")?;
        match self.workbench.spring() {
            Ok(spring) => writeln!(out, "{spring}")?,
            Err(_) => writeln!(out, "spring: (none)")?,
        }
        match self.workbench.damper() {
            Ok(damper) => writeln!(out, "{damper}")?,
            Err(_) => writeln!(out, "damper: (none)")?,
        }
        Ok(())
    }
}

fn nothing_to_save<W: Write>(out: &mut W) -> Result<(), ShellError> {
    warn!("nothing to save");
    writeln!(out, "warning: nothing to save; run `select` first")?;
    Ok(())
}

/// Writes the reference spring/oil walkthrough: a 200 N/m spring carrying
/// 1 kg, a 15W oil at three temperatures, and a sweep over damping factors.
///
/// # Errors
///
/// Returns [`ShellError::Io`] if writing fails.
pub fn write_demo<W: Write>(mut out: W) -> Result<(), ShellError> {
    let spring = Spring::new(SpringParameters {
        name: "Spring A".into(),
        stiffness: newton_per_meter(200.0),
        free_length: Length::new::<meter>(0.1),
        max_deflection: Length::new::<meter>(0.02),
        inner_diameter: Length::new::<meter>(0.02),
        outer_diameter: Length::new::<meter>(0.03),
    })?;
    let oil = Damper::new(DamperParameters {
        name: "15W".into(),
        density: MassDensity::new::<gram_per_cubic_centimeter>(0.881),
        viscosity_40: KinematicViscosity::new::<centistokes>(72.6),
        viscosity_100: KinematicViscosity::new::<centistokes>(11.6),
    })?;
    let mass = Mass::new::<kilogram>(1.0);

    writeln!(
        out,
        "natural frequency (1 kg): {:.3} Hz",
        spring.natural_frequency(mass)?.get::<hertz>()
    )?;
    for celsius in [40.0, 70.0, 100.0] {
        let eta = oil.dynamic_viscosity(ThermodynamicTemperature::new::<degree_celsius>(celsius));
        writeln!(
            out,
            "dynamic viscosity at {celsius} °C: {:.3} Pa·s",
            eta.get::<pascal_second>()
        )?;
    }

    let stiffness = spring.stiffness();
    let critical = oil.critical_damping_coefficient(mass, stiffness, 1.0)?;
    writeln!(out)?;
    writeln!(out, "critical coefficient: {:.2} N·s/m", critical.value)?;

    for factor in [0.5, 1.0, 2.0] {
        let c = oil.critical_damping_coefficient(mass, stiffness, factor)?;
        let zeta = oil.damping_ratio(mass, stiffness, c)?;
        writeln!(
            out,
            "factor={factor:.1} -> c={:.2} N·s/m -> ζ={:.2} -> {}",
            c.value,
            zeta.get::<ratio>(),
            DampingRegime::classify(zeta)
        )?;
    }

    Ok(())
}

/// Formats an error followed by its chain of sources.
fn report(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

fn arity(args: &[String], min: usize, max: usize, usage: &'static str) -> Result<(), ShellError> {
    if (min..=max).contains(&args.len()) {
        Ok(())
    } else {
        Err(ShellError::Usage { usage })
    }
}

fn number(field: &'static str, token: &str) -> Result<f64, ShellError> {
    token.parse().map_err(|_| ShellError::Parse {
        field,
        input: token.to_owned(),
    })
}

/// Parses `args[index]`, or returns `default` when the argument is absent.
fn number_or(
    field: &'static str,
    args: &[String],
    index: usize,
    default: f64,
) -> Result<f64, ShellError> {
    args.get(index).map_or(Ok(default), |token| number(field, token))
}

/// Splits a line on whitespace, keeping double-quoted text together and
/// dropping everything from an unquoted `#` on.
fn tokenize(line: &str) -> Result<Vec<String>, ShellError> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        match chars.peek() {
            None | Some('#') => break,
            Some('"') => {
                chars.next();
                let mut token = String::new();
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some(c) => token.push(c),
                        None => return Err(ShellError::UnterminatedQuote),
                    }
                }
                tokens.push(token);
            }
            Some(_) => {
                let mut token = String::new();
                while let Some(c) = chars.next_if(|c| !c.is_whitespace()) {
                    token.push(c);
                }
                tokens.push(token);
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str) -> (Shell, String) {
        let mut shell = Shell::new(ShellOptions::default());
        let mut out = Vec::new();
        shell.run(script.as_bytes(), &mut out, false).unwrap();
        (shell, String::from_utf8(out).unwrap())
    }

    #[test]
    fn tokenizer_handles_quotes_and_comments() {
        assert_eq!(
            tokenize(r#"spring "Spring A" 200  0.1 # trailing"#).unwrap(),
            vec!["spring", "Spring A", "200", "0.1"]
        );
        assert!(tokenize("   ").unwrap().is_empty());
        assert!(tokenize("# only a comment").unwrap().is_empty());
        assert!(matches!(
            tokenize(r#"spring "open"#),
            Err(ShellError::UnterminatedQuote)
        ));
    }

    #[test]
    fn spring_calculations() {
        let (shell, text) = run("\
spring \"Spring A\" 200 0.1 0.02 0.02 0.03
force 0.01
limits 0.02
limits -0.03
frequency 1
omega 1
");
        assert!(shell.workbench().spring().is_ok());
        assert!(text.contains("F = 2.000000 N"));
        assert!(text.contains("within limits"));
        assert!(text.contains("exceeds max deflection of 0.02 m"));
        assert!(text.contains("f_n = 2.2508 Hz"));
        assert!(text.contains("ω_n = 14.1421 rad/s"));
        assert!(!text.contains("error:"));
    }

    #[test]
    fn damper_calculations() {
        let (_, text) = run("\
damper 15W 0.881 72.6 11.6
viscosity 70
coefficient 1 200
coefficient 1 200 0.5
ratio 1 200 10
");
        assert!(text.contains("η(70 °C) = 0.037090 Pa·s"));
        assert!(text.contains("c = 28.2843 N·s/m (factor 1)"));
        assert!(text.contains("c = 14.1421 N·s/m (factor 0.5)"));
        assert!(text.contains("ζ = 0.3536 (underdamped)"));
    }

    #[test]
    fn missing_prerequisite_is_reported_and_session_continues() {
        let (shell, text) = run("\
force 0.01
viscosity 40
spring A 200 0.1 0.02 0.02 0.03
force 0.01
");
        assert!(text.contains("error: no spring configured"));
        assert!(text.contains("error: no damper configured"));
        assert!(text.contains("F = 2.000000 N"));
        assert!(shell.workbench().damper().is_err());
    }

    #[test]
    fn parse_errors_name_the_field() {
        let mut shell = Shell::new(ShellOptions::default());
        let mut out = Vec::<u8>::new();

        let err = shell
            .execute("spring A 200 abc 0.02 0.02 0.03", &mut out)
            .unwrap_err();
        assert!(matches!(
            err,
            ShellError::Parse { field: "free length", ref input } if input == "abc"
        ));
        assert!(shell.workbench().spring().is_err());
    }

    #[test]
    fn invalid_parameters_leave_workbench_unchanged() {
        let (shell, text) = run("\
spring A 200 0.1 0.02 0.02 0.03
spring B -5 0.1 0.02 0.02 0.03
");
        assert!(text.contains("error: invalid spring: stiffness must be > 0 N/m, got -5 N/m"));
        assert_eq!(shell.workbench().spring().unwrap().name(), "A");
    }

    #[test]
    fn replacing_a_component_is_announced() {
        let (shell, text) = run("\
damper 5W 0.86 18 4.1
damper 15W 0.881 72.6 11.6
");
        assert!(text.contains("replaced damper '5W'"));
        assert_eq!(shell.workbench().damper().unwrap().name(), "15W");
    }

    #[test]
    fn usage_and_unknown_commands() {
        let (_, text) = run("\
force
frobnicate 1
coefficient 1
");
        assert!(text.contains("error: no spring configured"));
        assert!(text.contains("error: unknown command `frobnicate`"));
        assert!(text.contains("error: no damper configured"));

        let mut shell = Shell::new(ShellOptions::default());
        shell.execute("spring", &mut io::sink()).unwrap();
        assert!(matches!(
            shell.execute("force 0.01 0.02", &mut io::sink()),
            Err(ShellError::Usage { .. })
        ));
        assert!(matches!(
            shell.execute("spring A 200 0.1", &mut io::sink()),
            Err(ShellError::Usage { .. })
        ));
        assert!(matches!(
            shell.execute("damper 15W 0.881", &mut io::sink()),
            Err(ShellError::Usage { .. })
        ));
        assert!(matches!(
            shell.execute("ratio 1 200 10 4", &mut io::sink()),
            Err(ShellError::Usage { .. })
        ));
    }

    #[test]
    fn bare_commands_use_reference_values() {
        let (shell, text) = run("\
spring
force
limits
frequency
omega
damper
viscosity
coefficient
coefficient 1 200 0.5
ratio
");
        assert!(!text.contains("error:"), "{text}");
        assert!(text.contains("spring 'Resorte A'"));
        assert!(text.contains("F = 2.000000 N"));
        assert!(text.contains("within limits (max deflection 0.02 m)"));
        assert!(text.contains("f_n = 2.2508 Hz"));
        assert!(text.contains("ω_n = 14.1421 rad/s"));
        assert!(text.contains("damper 'Aceite 15W'"));
        assert!(text.contains("η(40 °C) = 0.063961 Pa·s"));
        assert!(text.contains("c = 28.2843 N·s/m (factor 1)"));
        assert!(text.contains("c = 14.1421 N·s/m (factor 0.5)"));
        assert!(text.contains("ζ = 0.3536 (underdamped)"));

        assert_eq!(shell.workbench().spring().unwrap().name(), "Resorte A");
        assert_eq!(shell.workbench().damper().unwrap().name(), "Aceite 15W");
    }

    #[test]
    fn bare_calculation_still_needs_a_component() {
        let (shell, text) = run("frequency
ratio
");
        assert!(text.contains("error: no spring configured"));
        assert!(text.contains("error: no damper configured"));
        assert!(shell.workbench().spring().is_err());
    }

    #[test]
    fn save_without_result_warns() {
        let (shell, text) = run("save plot.png\nexport data.csv\n");
        assert_eq!(text.matches("warning: nothing to save").count(), 2);
        assert!(shell.last_selection().is_none());
    }

    #[test]
    fn quit_stops_reading() {
        let (_, text) = run("quit\nspring A 200 0.1 0.02 0.02 0.03\n");
        assert!(text.is_empty());

        let mut shell = Shell::new(ShellOptions::default());
        assert_eq!(
            shell.execute("exit", &mut io::sink()).unwrap(),
            Outcome::Quit
        );
    }

    #[test]
    fn missing_catalog_is_reported() {
        let options = ShellOptions {
            springs_path: PathBuf::from("/nonexistent/springs.csv"),
            ..ShellOptions::default()
        };
        let mut shell = Shell::new(options);
        let mut out = Vec::new();
        shell
            .run("select 10 100 0.01\n".as_bytes(), &mut out, false)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("error: cannot open catalog /nonexistent/springs.csv"));
    }

    #[test]
    fn demo_report() {
        let mut out = Vec::new();
        write_demo(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("natural frequency (1 kg): 2.251 Hz"));
        assert!(text.contains("dynamic viscosity at 40 °C: 0.064 Pa·s"));
        assert!(text.contains("dynamic viscosity at 70 °C: 0.037 Pa·s"));
        assert!(text.contains("dynamic viscosity at 100 °C: 0.010 Pa·s"));
        assert!(text.contains("critical coefficient: 28.28 N·s/m"));
        assert!(text.contains("factor=0.5 -> c=14.14 N·s/m -> ζ=0.50 -> underdamped"));
        assert!(text.contains("factor=1.0 -> c=28.28 N·s/m -> ζ=1.00 -> critically damped"));
        assert!(text.contains("factor=2.0 -> c=56.57 N·s/m -> ζ=2.00 -> overdamped"));
    }
}
