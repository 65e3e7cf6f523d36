//! The renderable contract shared by every generated artifact

use std::fmt;

use crate::error::Result;

/// Anything that can produce its own source text
///
/// Object safe, so writers can hold `Box<dyn Renderable>` without knowing the
/// concrete model kind.
pub trait Renderable {
    /// Render the artifact to text
    fn render(&self) -> Result<String>;
}

impl<R: Renderable + ?Sized> Renderable for &R {
    fn render(&self) -> Result<String> {
        (**self).render()
    }
}

impl<R: Renderable + ?Sized> Renderable for Box<R> {
    fn render(&self) -> Result<String> {
        (**self).render()
    }
}

/// Writes `render()` output
///
/// # Panics
/// A render failure becomes [`fmt::Error`], which makes `to_string()` and
/// `format!` panic. Callers that need the error must call [`Renderable::render`].
impl fmt::Display for dyn Renderable + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.render().map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerationError;

    struct Fixed(&'static str);

    impl Renderable for Fixed {
        fn render(&self) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct Broken;

    impl Renderable for Broken {
        fn render(&self) -> Result<String> {
            Err(GenerationError::RenderError("boom".to_string()))
        }
    }

    #[test]
    fn test_display_uses_render() {
        let boxed: Box<dyn Renderable> = Box::new(Fixed("class A: pass"));
        assert_eq!(boxed.to_string(), "class A: pass");
    }

    #[test]
    fn test_heterogeneous_collection() {
        let items: Vec<Box<dyn Renderable>> = vec![Box::new(Fixed("a")), Box::new(Fixed("b"))];
        let joined: Vec<String> = items.iter().map(|r| r.render().unwrap()).collect();
        assert_eq!(joined, vec!["a", "b"]);
    }

    #[test]
    fn test_display_reports_render_failure() {
        use std::fmt::Write;

        let broken: &dyn Renderable = &Broken;
        let mut out = String::new();
        assert!(write!(out, "{}", broken).is_err());
    }
}
