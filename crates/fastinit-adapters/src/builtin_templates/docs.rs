//! Generated documentation: the root README and one README per package.

use std::fmt::Write as _;

use fastinit_core::domain::{Feature, Linter, ProjectOptions, TemplateDescriptor, TestFramework};

use super::fill;

pub(super) fn descriptors() -> Vec<TemplateDescriptor> {
    vec![
        TemplateDescriptor::new("README.md", Feature::Core, readme),
        TemplateDescriptor::new("app/README.md", Feature::Core, app_readme),
        TemplateDescriptor::new("app/api/README.md", Feature::Core, api_readme),
        TemplateDescriptor::new("app/api/v1/README.md", Feature::Core, api_v1_readme),
        TemplateDescriptor::new("app/core/README.md", Feature::Core, core_readme),
        TemplateDescriptor::new("app/schemas/README.md", Feature::Core, schemas_readme),
        TemplateDescriptor::new("app/services/README.md", Feature::Core, services_readme),
        TemplateDescriptor::new("app/models/README.md", Feature::Models, models_readme),
        TemplateDescriptor::new("app/db/README.md", Feature::DbBase, db_readme),
        TemplateDescriptor::new("tests/README.md", Feature::TestFramework, tests_readme),
    ]
}

// ── Root README ───────────────────────────────────────────────────────────────

fn tree(options: &ProjectOptions) -> String {
    let mut lines = vec![
        format!("{}/", options.name()),
        "├── app/".to_string(),
        "│   ├── api/".to_string(),
        "│   │   ├── deps.py             # Shared dependencies".to_string(),
        "│   │   └── v1/users.py         # Example router".to_string(),
        "│   ├── core/".to_string(),
        "│   │   ├── config.py           # Settings from the environment".to_string(),
        "│   │   └── security.py         # OAuth2 scheme".to_string(),
    ];
    if !options.orm().is_none() {
        lines.push("│   ├── models/".to_string());
        lines.push("│   │   └── user.py             # ORM model".to_string());
    }
    if options.uses_persistence() {
        lines.push("│   ├── db/".to_string());
        if options.database().is_none() {
            lines.push("│   │   └── base.py             # Declarative base".to_string());
        } else {
            lines.push("│   │   ├── base.py             # Declarative base".to_string());
            lines.push("│   │   └── session.py          # Engine and get_session()".to_string());
        }
    }
    lines.extend(
        [
            "│   ├── schemas/",
            "│   │   └── user.py             # Pydantic models",
            "│   ├── services/",
            "│   │   └── user_service.py     # Business logic",
            "│   └── main.py                 # Application entry point",
        ]
        .map(String::from),
    );
    if !options.test_framework().is_none() {
        lines.push("├── tests/".to_string());
        lines.push("│   └── test_users.py           # Smoke tests".to_string());
    }
    if options.docker() {
        lines.push("├── Dockerfile".to_string());
        lines.push("├── docker-compose.yml".to_string());
        lines.push("├── .dockerignore".to_string());
    }
    if !options.linter().is_none() {
        lines.push("├── .pre-commit-config.yaml".to_string());
    }
    lines.extend(
        [
            "├── .env                        # Local environment",
            "├── .gitignore",
            "├── pyproject.toml",
            "└── README.md",
        ]
        .map(String::from),
    );
    lines.join("\n")
}

fn readme(options: &ProjectOptions) -> String {
    let mut out = fill(
        options,
        "# {{PROJECT_TITLE}}\n\nA FastAPI service generated by fastinit.\n\n## Getting started\n\n```bash\nuv sync\nuv run uvicorn app.main:app --reload\n```\n\nThe API is served at <http://127.0.0.1:8000>; interactive docs live at `/docs`.\n\n## Layout\n\n```text\n",
    );
    out.push_str(&tree(options));
    out.push_str("\n```\n");

    let database = options.database();
    if !database.is_none() {
        let _ = write!(
            out,
            "\n## Database\n\nConfigured for **{}**. The connection string comes from `DATABASE_URL` \
             (see `.env`). Routes obtain a session with `Depends(get_session)` from \
             `app/db/session.py`.\n",
            database.label()
        );
    }

    let orm = options.orm();
    if !orm.is_none() {
        let _ = write!(
            out,
            "\n## ORM\n\nModels are written with **{}** on top of the shared base in \
             `app/db/base.py`. Register each new model in `app/models/__init__.py`.\n",
            orm.label()
        );
    }

    if options.docker() {
        out.push_str(
            "\n## Docker\n\n```bash\ndocker compose up --build\n```\n",
        );
    }

    match options.test_framework() {
        TestFramework::PyTest => out.push_str("\n## Testing\n\n```bash\nuv run pytest\n```\n"),
        TestFramework::PyTestAsync => out.push_str(
            "\n## Testing\n\n```bash\nuv run pytest\n```\n\nAsync tests run through pytest-asyncio in auto mode.\n",
        ),
        TestFramework::None => {}
    }

    match options.linter() {
        Linter::Ruff => out.push_str(
            "\n## Linting\n\n```bash\nuv run ruff check .\nuv run ruff format .\n```\n",
        ),
        Linter::Black => out.push_str("\n## Formatting\n\n```bash\nuv run black .\n```\n"),
        Linter::None => {}
    }

    let _ = write!(
        out,
        "\n## Environment\n\n| Variable | Default | Purpose |\n|----------|---------|---------|\n\
         | `APP_NAME` | `{}` | Title shown in the OpenAPI docs |\n\
         | `DEBUG` | `true` | FastAPI debug mode |\n",
        options.name()
    );
    if !database.is_none() {
        out.push_str("| `DATABASE_URL` | see `.env` | SQLAlchemy connection string |\n");
    }

    out.push_str("\n## Tech stack\n\n");
    for item in tech_stack(options) {
        let _ = writeln!(out, "- {item}");
    }
    out
}

fn tech_stack(options: &ProjectOptions) -> Vec<String> {
    let mut items = vec![
        "FastAPI".to_string(),
        "Uvicorn".to_string(),
        "pydantic-settings".to_string(),
    ];
    let choices = [
        (options.database().is_none(), options.database().label()),
        (options.orm().is_none(), options.orm().label()),
        (options.linter().is_none(), options.linter().label()),
        (options.test_framework().is_none(), options.test_framework().label()),
    ];
    items.extend(
        choices
            .into_iter()
            .filter(|(none, _)| !none)
            .map(|(_, label)| label.to_string()),
    );
    if options.docker() {
        items.push("Docker".to_string());
    }
    items
}

// ── Package READMEs ───────────────────────────────────────────────────────────

fn app_readme(_: &ProjectOptions) -> String {
    "# app\n\nApplication package. `main.py` builds the FastAPI instance and mounts the routers from `api/`.\n"
        .to_string()
}

fn api_readme(_: &ProjectOptions) -> String {
    "# app/api\n\nHTTP layer. `deps.py` holds dependencies shared between routers; versioned routers live below `v1/`.\n"
        .to_string()
}

fn api_v1_readme(_: &ProjectOptions) -> String {
    "# app/api/v1\n\nVersion 1 routers. Add a module here and include its router in `app/api/__init__.py`.\n"
        .to_string()
}

fn core_readme(_: &ProjectOptions) -> String {
    "# app/core\n\nSettings (`config.py`, read from `.env`) and security helpers (`security.py`).\n"
        .to_string()
}

fn schemas_readme(_: &ProjectOptions) -> String {
    "# app/schemas\n\nPydantic models for request and response bodies.\n".to_string()
}

fn services_readme(_: &ProjectOptions) -> String {
    "# app/services\n\nBusiness logic called by routers. Keep HTTP details out of this package.\n"
        .to_string()
}

fn models_readme(options: &ProjectOptions) -> String {
    format!(
        "# app/models\n\n{} models. Each model imports `Base` from `app.db.base` and is re-exported from `__init__.py`.\n",
        options.orm().label()
    )
}

fn db_readme(options: &ProjectOptions) -> String {
    let mut out = String::from("# app/db\n\n`base.py` defines the declarative base shared by all models.\n");
    if !options.database().is_none() {
        out.push_str("`session.py` creates the engine and the `get_session()` dependency.\n");
    }
    out
}

fn tests_readme(options: &ProjectOptions) -> String {
    format!(
        "# tests\n\n{} suite. Run it with `uv run pytest`.\n",
        options.test_framework().label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastinit_core::domain::{Database, Orm};

    #[test]
    fn readme_sections_follow_options() {
        let bare = readme(&ProjectOptions::builder().name("demo").unwrap().build());
        assert!(bare.starts_with("# Demo"));
        assert!(!bare.contains("## Database"));
        assert!(!bare.contains("## Docker"));
        assert!(!bare.contains("DATABASE_URL"));

        let full = readme(
            &ProjectOptions::builder()
                .name("demo")
                .unwrap()
                .database(Database::PostgreSql)
                .orm(Orm::SqlAlchemy)
                .linter(Linter::Ruff)
                .test_framework(TestFramework::PyTest)
                .docker(true)
                .build(),
        );
        for section in ["## Database", "## ORM", "## Docker", "## Testing", "## Linting"] {
            assert!(full.contains(section), "missing {section}");
        }
        assert!(full.contains("**PostgreSQL**"));
        assert!(full.contains("session.py"));
    }

    #[test]
    fn tech_stack_lists_only_selected_tools() {
        let opts = ProjectOptions::builder()
            .name("demo")
            .unwrap()
            .database(Database::Sqlite)
            .linter(Linter::Black)
            .build();
        assert_eq!(
            tech_stack(&opts),
            ["FastAPI", "Uvicorn", "pydantic-settings", "SQLite", "Black"]
        );
        assert!(readme(&opts).contains("## Tech stack\n\n- FastAPI\n"));
    }

    #[test]
    fn tree_lists_db_without_session_when_orm_only() {
        let out = tree(
            &ProjectOptions::builder()
                .name("demo")
                .unwrap()
                .orm(Orm::SqlModel)
                .build(),
        );
        assert!(out.contains("base.py"));
        assert!(!out.contains("session.py"));
    }

    #[test]
    fn db_readme_mentions_session_only_with_database() {
        let orm_only = ProjectOptions::builder().name("demo").unwrap().orm(Orm::SqlModel).build();
        assert!(!db_readme(&orm_only).contains("session.py"));
    }
}
