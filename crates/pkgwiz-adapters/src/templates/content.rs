//! File bodies for the built-in Python package.
//!
//! Placeholders use the `{{KEY}}` form understood by
//! [`pkgwiz_core::domain::RenderContext`].

pub const GITIGNORE: &str = "*.pyc
__pycache__/
build/
dist/
*.egg-info/
.venv/
.pytest_cache/
";

pub const README: &str = r#"# {{PACKAGE_NAME}}

## Overview

{{PACKAGE_NAME}} is a Python package that provides functionality for [describe the purpose of the package here]. This package is designed to help [target audience] achieve [specific goals].

## Features

- Feature 1: [Describe feature 1]
- Feature 2: [Describe feature 2]
- Feature 3: [Describe feature 3]

## Installation

To install the package, use the following command:

```
pip install {{PACKAGE_NAME}}
```

## Contributing

Contributions are welcome! Please follow these steps to contribute:

1. Fork the repository.
2. Create a new branch (`git checkout -b feature-branch`).
3. Commit your changes (`git commit -am 'Add new feature'`).
4. Push to the branch (`git push origin feature-branch`).
5. Create a new Pull Request.

## License

This project is licensed under the MIT License - see the LICENSE file for details.

## Contact

For questions or support, please reach out to {{AUTHOR}} <{{AUTHOR_EMAIL}}>.
"#;

pub const REQUIREMENTS: &str = "# Add your package dependencies here\n";

pub const DEV_REQUIREMENTS: &str = "# Development dependencies
pre-commit==3.8.0
black==24.10.0
docformatter==1.7.5
flake8>=4.0.1,<5.0.0
pytest>=7.2.0,<8.0.0
";

pub const SETUP_PY: &str = r#"from setuptools import setup, find_packages

setup(
    name='{{PACKAGE_NAME}}',
    version='0.1.0',
    packages=find_packages(exclude=['tests']),
    install_requires=[],
    author='{{AUTHOR}}',
    author_email='{{AUTHOR_EMAIL}}',
    description='A description of your package.',
    long_description=open('README.md').read(),
    long_description_content_type='text/markdown',
    url='https://github.com/yourusername/{{PACKAGE_NAME}}',
    classifiers=[
        'Programming Language :: Python :: 3',
    ],
    extras_require={
        'dev': [
            'pytest',
            'flake8',
        ],
    },
    entry_points={
        'console_scripts': [
            '{{PACKAGE_NAME}}={{MODULE_NAME}}.cli:main',
        ],
    },
)
"#;

pub const LICENSE: &str = r#"MIT License

Copyright (c) {{YEAR}} {{AUTHOR}}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#;

pub const PACKAGE_INIT: &str = "\"\"\"Initialize the {{PACKAGE_NAME}} package.\"\"\"\n";

pub const TESTS_INIT: &str =
    "\"\"\"Initialize the test module for {{PACKAGE_NAME}} package.\"\"\"\n";

/// `{{SUBMODULE}}` is filled per sub-module, not from the shared context.
pub const SUBMODULE_INIT: &str = "\"\"\"Initialize the {{SUBMODULE}} module.\"\"\"\n";

pub const DEVCONTAINER_JSON: &str = r#"{
    "name": "{{PACKAGE_NAME}}",
    "dockerFile": "Dockerfile",
    "context": "..",
    "runArgs": ["--env-file", ".devcontainer/devcontainer.env"],
    "customizations": {
        "vscode": {
            "extensions": [
                "ms-python.python",
                "ms-python.vscode-pylance",
                "mhutchie.git-graph",
                "eamodio.gitlens"
            ]
        }
    },
    "forwardPorts": [],
    "postCreateCommand": "bash .devcontainer/post-create.sh",
    "features": {
        "ghcr.io/devcontainers/features/docker-in-docker:2": {
            "moby": true,
            "installDockerBuildx": true,
            "version": "latest"
        },
        "ghcr.io/devcontainers/features/git:1": {
            "ppa": true,
            "version": "latest"
        },
        "ghcr.io/devcontainers/features/github-cli:1": {
            "installDirectlyFromGitHubRelease": true,
            "version": "latest"
        }
    }
}
"#;

pub const DOCKERFILE: &str = "FROM {{DOCKER_IMAGE}}

# Install pip and upgrade it
RUN pip install --upgrade pip

# Set the working directory
WORKDIR /workspace

# Copy the current directory contents into the container
COPY . /workspace

# Install the package in editable mode with dev dependencies
RUN pip install -e .[dev]
";

pub const DEVCONTAINER_ENV: &str = "PYTHONDONTWRITEBYTECODE=1
PYTHONUNBUFFERED=1
";

pub const POST_CREATE_SH: &str = "#!/usr/bin/env bash
set -euo pipefail

pip install -r dev_requirements.txt
pre-commit install
";

pub const PUBLISH_WORKFLOW: &str = "name: Publish Python Package

on:
  push:
    tags:
      - '*.*.*'

jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - name: Check out code
        uses: actions/checkout@v3

      - name: Set up Python
        uses: actions/setup-python@v4
        with:
          python-version: '3.x'

      - name: Install dependencies
        run: |
          python -m pip install --upgrade pip
          pip install setuptools wheel

      - name: Build package
        run: |
          python setup.py sdist bdist_wheel

      - name: Publish package
        uses: pypa/gh-action-pypi-publish@release/v1
        with:
          password: ${{ secrets.PYPI_API_TOKEN }}
";

pub const PRE_COMMIT_CONFIG: &str = r"repos:
  - repo: https://github.com/PyCQA/docformatter
    rev: v1.7.5
    hooks:
      - id: docformatter
        args:
          - --in-place
          - --recursive
          - --wrap-summaries=88
          - --wrap-descriptions=88
        files: \.py$

  - repo: https://github.com/psf/black
    rev: 24.10.0
    hooks:
      - id: black
        language_version: python3

  - repo: https://github.com/pre-commit/pre-commit-hooks
    rev: v5.0.0
    hooks:
      - id: trailing-whitespace
      - id: debug-statements
      - id: check-merge-conflict
";
