//! Built-in example document pairs.

/// A canned before/after document pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub left: &'static str,
    pub right: &'static str,
}

/// Immutable registry of examples in registration order.
#[derive(Debug, Clone, Copy)]
pub struct ExampleCatalog {
    examples: &'static [Example],
}

impl Default for ExampleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ExampleCatalog {
    /// Catalog holding the built-in examples.
    pub fn builtin() -> Self {
        Self { examples: BUILTIN }
    }

    pub fn all(&self) -> &'static [Example] {
        self.examples
    }

    pub fn by_id(&self, id: &str) -> Option<&'static Example> {
        self.examples.iter().find(|example| example.id == id)
    }
}

const BUILTIN: &[Example] = &[
    Example {
        id: "basic",
        name: "Basic object",
        description: "Simple property additions, removals and changes",
        left: r#"{
  "name": "John",
  "age": 25,
  "city": "New York"
}"#,
        right: r#"{
  "name": "John",
  "age": 26,
  "city": "San Francisco",
  "email": "john@example.com"
}"#,
    },
    Example {
        id: "nested",
        name: "Nested objects",
        description: "Objects containing nested structures",
        left: r#"{
  "user": {
    "name": "Alice",
    "profile": {
      "age": 30,
      "location": "Beijing"
    }
  },
  "settings": {
    "theme": "dark",
    "notifications": true
  }
}"#,
        right: r#"{
  "user": {
    "name": "Alice",
    "profile": {
      "age": 31,
      "location": "Shanghai",
      "bio": "Software Engineer"
    }
  },
  "settings": {
    "theme": "light",
    "notifications": true,
    "language": "zh-CN"
  }
}"#,
    },
    Example {
        id: "array",
        name: "Arrays",
        description: "Array elements added, removed and changed",
        left: r#"{
  "tags": [
    "javascript",
    "typescript",
    "react"
  ],
  "scores": [
    85,
    90,
    78
  ]
}"#,
        right: r#"{
  "tags": [
    "typescript",
    "react",
    "vue",
    "node"
  ],
  "scores": [
    85,
    92,
    78,
    88
  ]
}"#,
    },
    Example {
        id: "complex",
        name: "Complex structure",
        description: "Deep nesting mixed with arrays of objects",
        left: r#"{
  "project": {
    "name": "JSON Diff SDK",
    "version": "1.0.0",
    "dependencies": [
      {
        "name": "react",
        "version": "18.0.0"
      },
      {
        "name": "typescript",
        "version": "5.0.0"
      }
    ],
    "config": {
      "build": {
        "target": "es2020",
        "minify": true
      }
    }
  }
}"#,
        right: r#"{
  "project": {
    "name": "JSON Diff SDK",
    "version": "1.1.0",
    "dependencies": [
      {
        "name": "react",
        "version": "18.2.0"
      },
      {
        "name": "typescript",
        "version": "5.0.0"
      },
      {
        "name": "vite",
        "version": "4.0.0"
      }
    ],
    "config": {
      "build": {
        "target": "es2022",
        "minify": true,
        "sourcemap": true
      },
      "test": {
        "coverage": true
      }
    }
  }
}"#,
    },
    Example {
        id: "api-response",
        name: "API response",
        description: "Changes between two snapshots of an API response",
        left: r#"{
  "status": "success",
  "data": {
    "users": [
      {
        "id": 1,
        "name": "Alice",
        "active": true
      },
      {
        "id": 2,
        "name": "Bob",
        "active": false
      }
    ],
    "total": 2,
    "page": 1
  },
  "timestamp": "2024-01-01T00:00:00Z"
}"#,
        right: r#"{
  "status": "success",
  "data": {
    "users": [
      {
        "id": 1,
        "name": "Alice",
        "active": true,
        "role": "admin"
      },
      {
        "id": 2,
        "name": "Bob",
        "active": true
      },
      {
        "id": 3,
        "name": "Charlie",
        "active": true
      }
    ],
    "total": 3,
    "page": 1
  },
  "timestamp": "2024-01-02T00:00:00Z"
}"#,
    },
    Example {
        id: "empty",
        name: "Empty object",
        description: "From an empty object to one with content",
        left: "{}",
        right: r#"{
  "message": "Hello, World!",
  "count": 42,
  "items": [
    "a",
    "b",
    "c"
  ]
}"#,
    },
];
