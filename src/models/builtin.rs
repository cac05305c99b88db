//! Demo catalog served when no catalog file is configured.

pub(super) struct BuiltinFile {
    pub name: &'static str,
    pub content: &'static str,
    pub language: &'static str,
    pub type_tag: &'static str,
}

pub(super) const BUILTIN_FILES: &[BuiltinFile] = &[
    BuiltinFile {
        name: "index.html",
        content: r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Hello World</title>
</head>
<body>
    <h1>Hello, World!</h1>
    <p>Welcome to our website!</p>
</body>
</html>"#,
        language: "html",
        type_tag: "html",
    },
    BuiltinFile {
        name: "script.js",
        content: r#"console.log("Hello World!");

function greet(name) {
    return `Hello, ${name}!`;
}

const message = greet("zview");
console.log(message);"#,
        language: "javascript",
        type_tag: "js",
    },
    BuiltinFile {
        name: "styles.css",
        content: r#"body {
    font-family: Arial, sans-serif;
    margin: 0;
    padding: 20px;
    background: #f5f5f5;
}

h1 {
    color: #333;
    text-align: center;
}"#,
        language: "css",
        type_tag: "css",
    },
    BuiltinFile {
        name: "package.json",
        content: r#"{
  "name": "my-project",
  "version": "1.0.0",
  "main": "index.js",
  "dependencies": {
    "express": "^4.18.0"
  }
}"#,
        language: "json",
        type_tag: "json",
    },
    BuiltinFile {
        name: "README.md",
        content: r#"# My Project

A sample project served by zview.

## Features
- Syntax highlighting
- Persistent tabs
- File browser

**Enjoy reading!**"#,
        language: "markdown",
        type_tag: "md",
    },
];
