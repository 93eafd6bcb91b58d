use askama::Template;
use std::fs;
use std::path::Path;

/// One rendered handler method inside a controller class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodBlock {
    /// Doc comment lines, empty when the endpoint carries no `Doc`
    pub doc_lines: Vec<String>,
    /// Annotation, modifier and route marker lines, in emission order
    pub markers: Vec<String>,
    /// `public <ret> <name>(<params>)`
    pub signature: String,
    /// Placeholder body statement
    pub body: String,
}

/// Template data for generating one controller class
///
/// Everything is pre-rendered text; the template only lays it out.
#[derive(Template)]
#[template(path = "controller.java.txt", escape = "none")]
pub struct ControllerTemplateData {
    /// Package name, empty for the default package
    pub package: String,
    /// User imports, emitted before the framework imports
    pub imports: Vec<String>,
    /// Class-level doc comment lines
    pub doc_lines: Vec<String>,
    /// Class-level annotation markers
    pub annotations: Vec<String>,
    /// Controller class name
    pub class_name: String,
    /// `<name> : <type>` for each resource-scoped parameter
    pub resource_params: Vec<String>,
    /// Handler methods in declaration order
    pub methods: Vec<MethodBlock>,
}

impl ControllerTemplateData {
    /// Render the class text, always terminated by a newline.
    pub fn render_source(&self) -> anyhow::Result<String> {
        let mut source = self.render()?;
        if !source.ends_with('\n') {
            source.push('\n');
        }
        Ok(source)
    }
}

/// Write one rendered controller, replacing any existing file.
pub fn write_controller(path: &Path, source: &str) -> std::io::Result<()> {
    fs::write(path, source)?;
    tracing::info!(path = %path.display(), "Generated controller");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    fn empty(class_name: &str) -> ControllerTemplateData {
        ControllerTemplateData {
            package: String::new(),
            imports: Vec::new(),
            doc_lines: Vec::new(),
            annotations: Vec::new(),
            class_name: class_name.to_string(),
            resource_params: Vec::new(),
            methods: Vec::new(),
        }
    }

    #[test]
    fn test_minimal_class_layout() {
        let source = empty("PingController").render_source().unwrap();
        assert_eq!(
            source,
            "import org.springframework.web.bind.annotation.*;\n\
             import org.springframework.http.HttpStatus;\n\
             import java.util.*;\n\
             \n\
             public class PingController {\n\
             \n\
             }\n"
        );
    }

    #[test]
    fn test_full_class_layout() {
        let data = ControllerTemplateData {
            package: "com.example".to_string(),
            imports: vec!["com.example.dto.UserDto".to_string()],
            doc_lines: vec!["Users API".to_string(), "v1".to_string()],
            annotations: vec!["@RestController".to_string()],
            class_name: "UsersController".to_string(),
            resource_params: vec!["tenant : String".to_string()],
            methods: vec![MethodBlock {
                doc_lines: vec!["Fetch one".to_string()],
                markers: vec!["@GetMapping(\"users/{id}\")".to_string()],
                signature: "public UserDto __id_(@PathVariable int id)".to_string(),
                body: "return null; // TODO".to_string(),
            }],
        };
        let source = data.render_source().unwrap();
        assert_eq!(
            source,
            "package com.example;\n\
             \n\
             import com.example.dto.UserDto;\n\
             import org.springframework.web.bind.annotation.*;\n\
             import org.springframework.http.HttpStatus;\n\
             import java.util.*;\n\
             \n\
             /**\n \
             * Users API\n \
             * v1\n \
             */\n\
             @RestController\n\
             public class UsersController {\n\
             \n    \
             // resource param tenant : String\n    \
             /**\n     \
             * Fetch one\n     \
             */\n    \
             @GetMapping(\"users/{id}\")\n    \
             public UserDto __id_(@PathVariable int id) {\n        \
             return null; // TODO\n    \
             }\n\
             \n\
             }\n"
        );
    }

    #[test]
    fn test_write_controller() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("XController.java");
        write_controller(&path, "class X {}\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "class X {}\n");
        write_controller(&path, "class Y {}\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "class Y {}\n");
    }
}
