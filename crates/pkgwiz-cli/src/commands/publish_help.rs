//! `pkgwiz publish-help`: how to get a generated package onto PyPI.

use crate::{error::CliResult, output::OutputManager};

const MANUAL_STEPS: &[&str] = &[
    "python -m pip install --upgrade build twine",
    "python -m build            # writes dist/*.tar.gz and dist/*.whl",
    "python -m twine check dist/*",
    "python -m twine upload dist/*",
];

const WORKFLOW_STEPS: &[&str] = &[
    "Create an API token at https://pypi.org/manage/account/token/",
    "Add it to the repository secrets as PYPI_API_TOKEN",
    "Bump the version in setup.py and commit",
    "Push a tag: git tag 0.1.0 && git push origin 0.1.0",
    ".github/workflows/publish.yml builds and uploads on every X.Y.Z tag",
];

pub fn execute(output: OutputManager) -> CliResult<()> {
    output.header("Publishing to PyPI")?;
    output.print("")?;

    output.print("Manually, from the package root:")?;
    for step in MANUAL_STEPS {
        output.print(&format!("  {step}"))?;
    }
    output.print("")?;

    output.print("With the generated GitHub workflow:")?;
    for (n, step) in WORKFLOW_STEPS.iter().enumerate() {
        output.print(&format!("  {}. {step}", n + 1))?;
    }
    output.print("")?;

    output.info("Try TestPyPI first: twine upload --repository testpypi dist/*")?;
    Ok(())
}
