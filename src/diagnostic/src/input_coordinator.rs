//! Input Manager

use std::path::PathBuf;

/// A unique ID that corresponds to a piece of input tracked by an
/// [`InputCoordinator`].
///
/// This is used to find the source text again when a diagnostic is shown.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub struct InputId(usize);

#[derive(Default)]
pub struct InputCoordinator {
    /// Inputs, where [`InputId`] are the corresponding indexes.
    inputs: Vec<Input>,
}

impl InputCoordinator {
    /// Track source text passed on the command line.
    pub fn eval_input(&mut self, buffer: String) -> InputId {
        self.push(buffer, Name::Eval)
    }

    /// Track source text read from standard input.
    pub fn stdin_input(&mut self, buffer: String) -> InputId {
        self.push(buffer, Name::Stdin)
    }

    /// Track source text read from a file.
    pub fn file_input(&mut self, buffer: String, path: PathBuf) -> InputId {
        self.push(buffer, Name::File(path))
    }

    fn push(&mut self, buffer: String, name: Name) -> InputId {
        let id = self.inputs.len();
        self.inputs.push(Input { name, buffer });
        InputId(id)
    }

    pub fn get_input_buffer(&self, id: InputId) -> &str {
        self.inputs[id.0].buffer.as_str()
    }

    pub fn get_input_name(&self, id: InputId) -> String {
        match &self.inputs[id.0].name {
            Name::File(path) => format!("{}", path.display()),
            Name::Stdin => "<stdin>".into(),
            Name::Eval if id.0 == 0 => "<eval>".into(),
            Name::Eval => format!("<eval-{}>", id.0),
        }
    }

    /// A single line of an input, counting from one. Any trailing `\r` is
    /// dropped.
    pub fn get_line(&self, id: InputId, line: u32) -> Option<&str> {
        let index = (line as usize).checked_sub(1)?;
        self.get_input_buffer(id)
            .split('\n')
            .nth(index)
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
    }
}

/// A piece of input has a name, and a buffer which contains it's code.
struct Input {
    name: Name,
    buffer: String,
}

/// A piece of input is named based on where it came from.
enum Name {
    Stdin,
    Eval,
    File(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        let mut inputs = InputCoordinator::default();
        let eval = inputs.eval_input("a".into());
        let file = inputs.file_input("b".into(), PathBuf::from("A.java"));
        let stdin = inputs.stdin_input("c".into());
        let second = inputs.eval_input("d".into());

        assert_eq!(inputs.get_input_name(eval), "<eval>");
        assert_eq!(inputs.get_input_name(file), "A.java");
        assert_eq!(inputs.get_input_name(stdin), "<stdin>");
        assert_eq!(inputs.get_input_name(second), "<eval-3>");
    }

    #[test]
    fn lines_are_one_indexed() {
        let mut inputs = InputCoordinator::default();
        let id = inputs.eval_input("first\r\nsecond\n".into());

        assert_eq!(inputs.get_line(id, 0), None);
        assert_eq!(inputs.get_line(id, 1), Some("first"));
        assert_eq!(inputs.get_line(id, 2), Some("second"));
        assert_eq!(inputs.get_line(id, 3), Some(""));
        assert_eq!(inputs.get_line(id, 4), None);
    }
}
