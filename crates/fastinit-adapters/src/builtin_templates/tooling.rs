//! Project tooling: packaging, environment, linter, tests and Docker.

use std::fmt::Write as _;

use fastinit_core::domain::{
    Database, Feature, Linter, Orm, ProjectOptions, TemplateDescriptor, TestFramework,
};

use super::{empty, fill};

pub(super) fn descriptors() -> Vec<TemplateDescriptor> {
    vec![
        TemplateDescriptor::new("pyproject.toml", Feature::Core, pyproject),
        TemplateDescriptor::new(".env", Feature::Core, dotenv),
        TemplateDescriptor::new(".gitignore", Feature::Core, gitignore),
        TemplateDescriptor::variant(".pre-commit-config.yaml", Linter::Ruff, ruff_hooks),
        TemplateDescriptor::variant(".pre-commit-config.yaml", Linter::Black, black_hooks),
        TemplateDescriptor::new("tests/__init__.py", Feature::TestFramework, empty),
        TemplateDescriptor::variant("tests/test_users.py", TestFramework::PyTest, sync_tests),
        TemplateDescriptor::variant(
            "tests/test_users.py",
            TestFramework::PyTestAsync,
            async_tests,
        ),
        TemplateDescriptor::new("Dockerfile", Feature::Docker, dockerfile),
        TemplateDescriptor::new("docker-compose.yml", Feature::Docker, compose),
        TemplateDescriptor::new(".dockerignore", Feature::Docker, dockerignore),
    ]
}

// ── pyproject.toml ────────────────────────────────────────────────────────────

fn runtime_dependencies(options: &ProjectOptions) -> Vec<&'static str> {
    let mut deps = vec![
        "fastapi>=0.115",
        "uvicorn[standard]>=0.30",
        "pydantic>=2.7",
        "pydantic-settings>=2.3",
        "python-dotenv>=1.0",
    ];
    if options.uses_persistence() {
        deps.push("sqlalchemy>=2.0");
    }
    if options.orm() == Orm::SqlModel {
        deps.push("sqlmodel>=0.0.21");
    }
    match options.database() {
        Database::MySql => deps.push("pymysql>=1.1"),
        Database::PostgreSql => deps.push("psycopg2-binary>=2.9"),
        Database::Sqlite | Database::None => {}
    }
    deps
}

fn dev_dependencies(options: &ProjectOptions) -> Vec<&'static str> {
    let mut deps = Vec::new();
    match options.test_framework() {
        TestFramework::PyTest => deps.extend(["pytest>=8.0", "httpx>=0.27"]),
        TestFramework::PyTestAsync => {
            deps.extend(["pytest>=8.0", "pytest-asyncio>=0.23", "httpx>=0.27"])
        }
        TestFramework::None => {}
    }
    match options.linter() {
        Linter::Ruff => deps.push("ruff>=0.6"),
        Linter::Black => deps.push("black>=24.0"),
        Linter::None => {}
    }
    if !options.linter().is_none() {
        deps.push("pre-commit>=3.7");
    }
    deps
}

fn toml_list(out: &mut String, key: &str, items: &[&str]) {
    let _ = writeln!(out, "{key} = [");
    for item in items {
        let _ = writeln!(out, "    \"{item}\",");
    }
    out.push_str("]\n");
}

fn pyproject(options: &ProjectOptions) -> String {
    let mut out = fill(
        options,
        r#"[project]
name = "{{PROJECT_NAME}}"
version = "0.1.0"
description = "{{PROJECT_TITLE}} - a FastAPI service"
readme = "README.md"
requires-python = ">=3.10"
"#,
    );
    toml_list(&mut out, "dependencies", &runtime_dependencies(options));

    let dev = dev_dependencies(options);
    if !dev.is_empty() {
        out.push_str("\n[dependency-groups]\n");
        toml_list(&mut out, "dev", &dev);
    }

    match options.linter() {
        Linter::Ruff => out.push_str(
            r#"
[tool.ruff]
line-length = 88
target-version = "py310"

[tool.ruff.lint]
select = ["E", "F", "I", "UP", "B"]
"#,
        ),
        Linter::Black => out.push_str(
            r#"
[tool.black]
line-length = 88
target-version = ["py310"]
"#,
        ),
        Linter::None => {}
    }

    match options.test_framework() {
        TestFramework::PyTest => out.push_str(
            r#"
[tool.pytest.ini_options]
testpaths = ["tests"]
"#,
        ),
        TestFramework::PyTestAsync => out.push_str(
            r#"
[tool.pytest.ini_options]
testpaths = ["tests"]
asyncio_mode = "auto"
"#,
        ),
        TestFramework::None => {}
    }

    out
}

// ── Environment and ignore files ─────────────────────────────────────────────

fn dotenv(options: &ProjectOptions) -> String {
    let mut out = fill(options, "APP_NAME={{PROJECT_NAME}}\nDEBUG=true\n");
    if let Some(url) = options.database().connection_url() {
        let _ = writeln!(out, "DATABASE_URL={url}");
    }
    out
}

fn gitignore(options: &ProjectOptions) -> String {
    let mut out = String::from(
        r#"__pycache__/
*.py[cod]
.venv/
.env
.pytest_cache/
.ruff_cache/
.coverage
htmlcov/
dist/
build/
*.egg-info/
"#,
    );
    if options.database() == Database::Sqlite {
        out.push_str("*.db\n");
    }
    out
}

fn ruff_hooks(_: &ProjectOptions) -> String {
    r#"repos:
  - repo: https://github.com/astral-sh/ruff-pre-commit
    rev: v0.6.9
    hooks:
      - id: ruff
        args: [--fix]
      - id: ruff-format
"#
    .to_string()
}

fn black_hooks(_: &ProjectOptions) -> String {
    r#"repos:
  - repo: https://github.com/psf/black
    rev: 24.8.0
    hooks:
      - id: black
"#
    .to_string()
}

// ── tests/ ────────────────────────────────────────────────────────────────────

/// Extra checks shared by both runners; they only import, never connect.
fn persistence_checks(options: &ProjectOptions) -> String {
    let mut out = String::new();
    if !options.orm().is_none() {
        out.push_str(
            r#"

def test_user_model_table() -> None:
    from app.models.user import User

    assert User.__tablename__ == "users"
"#,
        );
    }
    if !options.database().is_none() {
        out.push_str(
            r#"

def test_session_dependency_is_generator() -> None:
    import inspect

    from app.db.session import get_session

    assert inspect.isgeneratorfunction(get_session)
"#,
        );
    }
    out
}

fn sync_tests(options: &ProjectOptions) -> String {
    let mut out = String::from(
        r#"from fastapi.testclient import TestClient

from app.main import app

client = TestClient(app)


def test_health() -> None:
    response = client.get("/health")
    assert response.status_code == 200
    assert response.json() == {"status": "ok"}


def test_list_users() -> None:
    response = client.get("/users/")
    assert response.status_code == 200
    assert len(response.json()) == 2
"#,
    );
    out.push_str(&persistence_checks(options));
    out
}

fn async_tests(options: &ProjectOptions) -> String {
    let mut out = String::from(
        r#"from collections.abc import AsyncIterator

import pytest
from httpx import ASGITransport, AsyncClient

from app.main import app


@pytest.fixture
async def client() -> AsyncIterator[AsyncClient]:
    transport = ASGITransport(app=app)
    async with AsyncClient(transport=transport, base_url="http://test") as ac:
        yield ac


@pytest.mark.asyncio
async def test_health(client: AsyncClient) -> None:
    response = await client.get("/health")
    assert response.status_code == 200
    assert response.json() == {"status": "ok"}


@pytest.mark.asyncio
async def test_list_users(client: AsyncClient) -> None:
    response = await client.get("/users/")
    assert response.status_code == 200
    assert len(response.json()) == 2
"#,
    );
    out.push_str(&persistence_checks(options));
    out
}

// ── Docker ────────────────────────────────────────────────────────────────────

fn dockerfile(_: &ProjectOptions) -> String {
    r#"FROM python:3.11-slim

ENV PYTHONDONTWRITEBYTECODE=1 \
    PYTHONUNBUFFERED=1

WORKDIR /app

RUN pip install --no-cache-dir uv

COPY pyproject.toml README.md ./
RUN uv sync --no-dev

COPY . .

EXPOSE 8000
CMD ["uv", "run", "uvicorn", "app.main:app", "--host", "0.0.0.0", "--port", "8000"]
"#
    .to_string()
}

fn compose(options: &ProjectOptions) -> String {
    let mut out = fill(
        options,
        r#"services:
  api:
    build: .
    container_name: {{PROJECT_NAME}}-api
    ports:
      - "8000:8000"
    env_file:
      - .env
"#,
    );

    let db = match options.database() {
        Database::MySql => Some((
            "mysql+pymysql://user:password@db:3306/app",
            r#"  db:
    image: mysql:8.4
    environment:
      MYSQL_DATABASE: app
      MYSQL_USER: user
      MYSQL_PASSWORD: password
      MYSQL_ROOT_PASSWORD: root
    ports:
      - "3306:3306"
    volumes:
      - db-data:/var/lib/mysql
"#,
        )),
        Database::PostgreSql => Some((
            "postgresql+psycopg2://user:password@db:5432/app",
            r#"  db:
    image: postgres:16
    environment:
      POSTGRES_DB: app
      POSTGRES_USER: user
      POSTGRES_PASSWORD: password
    ports:
      - "5432:5432"
    volumes:
      - db-data:/var/lib/postgresql/data
"#,
        )),
        Database::Sqlite | Database::None => None,
    };

    if let Some((url, service)) = db {
        let _ = write!(
            out,
            "    environment:\n      DATABASE_URL: {url}\n    depends_on:\n      - db\n\n{service}\nvolumes:\n  db-data:\n"
        );
    }
    out
}

fn dockerignore(_: &ProjectOptions) -> String {
    r#".venv/
__pycache__/
*.py[cod]
.pytest_cache/
.ruff_cache/
.git/
.env
*.db
"#
    .to_string()
}
