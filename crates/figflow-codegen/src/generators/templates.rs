//! Template engine for wrapping generated widget trees.

use crate::error::Result;
use crate::format::indent_string;
use handlebars::Handlebars;
use serde::Serialize;

const STATELESS_TEMPLATE: &str = "stateless";
const FULL_APP_TEMPLATE: &str = "full_app";

const STATELESS: &str = r#"class {{name}} extends StatelessWidget {
  @override
  Widget build(BuildContext context) {
    return {{{body}}};
  }
}"#;

const FULL_APP: &str = r#"import 'package:flutter/material.dart';

void main() {
  runApp(const FigflowApp());
}

// Generated by figflow
class FigflowApp extends StatelessWidget {
  const FigflowApp({super.key});

  @override
  Widget build(BuildContext context) {
    return MaterialApp(
      theme: ThemeData.dark().copyWith(
        scaffoldBackgroundColor: const Color.fromARGB(255, 18, 32, 47),
      ),
      home: Scaffold(
        body: ListView(children: [
          {{name}}(),
        ]),
      ),
    );
  }
}

"#;

#[derive(Serialize)]
struct ComponentData<'a> {
    name: &'a str,
    body: String,
}

/// Template engine using Handlebars.
///
/// Output is Dart source, so HTML escaping is disabled.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Create a new template engine with the built-in wrappers registered.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.register_template_string(STATELESS_TEMPLATE, STATELESS)?;
        handlebars.register_template_string(
            FULL_APP_TEMPLATE,
            &format!("{}{}", FULL_APP, STATELESS),
        )?;

        Ok(Self { handlebars })
    }

    /// Register a template.
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars.register_template_string(name, template)?;
        Ok(())
    }

    /// Render a template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        Ok(self.handlebars.render(name, data)?)
    }

    /// Wrap a widget expression in a named `StatelessWidget`.
    pub fn stateless(&self, name: &str, widget: &str) -> Result<String> {
        self.render(STATELESS_TEMPLATE, &Self::component(name, widget))
    }

    /// Wrap a widget expression in a runnable application hosting the
    /// named component.
    pub fn full_app(&self, name: &str, widget: &str) -> Result<String> {
        self.render(FULL_APP_TEMPLATE, &Self::component(name, widget))
    }

    fn component<'d>(name: &'d str, widget: &str) -> ComponentData<'d> {
        ComponentData {
            name,
            body: indent_string(widget, 4).trim_start().to_string(),
        }
    }
}
