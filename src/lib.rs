//! Workspace-level integration tests for physicalc (see `tests/`).
