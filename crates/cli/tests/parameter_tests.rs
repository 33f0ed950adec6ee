#[cfg(test)]
mod tests {
    use clap::Parser;
    use flexparams_cli::arguments::{process_command_line, SpecProvider};
    use flexparams_cli::cli_args::Args;
    use flexparams_cli::output::render_yaml;
    use flexparams_core::normalize::normalize;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn run(command_line: &[&str]) -> String {
        let args = Args::parse_from(command_line);
        let source = process_command_line(args.input.as_deref(), &args.arguments).unwrap();
        let normalized = normalize(&source, &args.parameter_spec(), args.shape.into());
        render_yaml(&normalized).unwrap()
    }

    #[test]
    fn test_pairs_to_mapping() {
        let output = run(&["fp", "-n", "color,size", "--", "-color", "red", "-size", "big"]);
        assert_eq!(output, "color: red\nsize: big\n");
    }

    #[test]
    fn test_pairs_to_sequence_with_rename() {
        let output = run(&[
            "fp",
            "-n",
            "color,size",
            "-r",
            "colour=color",
            "-s",
            "sequence",
            "--",
            "-size",
            "big",
            "-colour",
            "red",
        ]);
        assert_eq!(output, "- red\n- big\n");
    }

    #[test]
    fn test_ambiguous_arguments() {
        let named = run(&["fp", "-n", "p,q", "a", "b"]);
        assert_eq!(named, "a: b\n");

        let positional = run(&["fp", "-n", "p,q", "-p", "a", "b"]);
        assert_eq!(positional, "p: a\nq: b\n");
    }

    #[test]
    fn test_odd_arguments_are_positional() {
        let output = run(&["fp", "-n", "x,y,z", "a", "b", "c"]);
        assert_eq!(output, "x: a\ny: b\nz: c\n");
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(run(&["fp", "-n", "a"]), "{}\n");
        assert_eq!(run(&["fp", "-n", "a", "-s", "sequence"]), "[]\n");
    }

    #[test]
    fn test_input_file_with_remaining_values() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "- {{-Color: red}}\n- x\n- y\n").unwrap();
        let temp_path = temp_file.path().to_str().unwrap();

        let output = run(&["fp", "-i", temp_path, "-l", "-r", "color=hue", "--remaining", "rest"]);
        assert_eq!(output, "hue: red\nrest:\n- x\n- y\n");
    }
}
