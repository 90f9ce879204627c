use assert_cmd::Command;

pub fn tagmark_cmd() -> Command {
    Command::cargo_bin("tagmark").unwrap()
}

pub const CDN_README: &str = "## Configuration

### Basic Information

These are the global settings for the Cdn API.

```yaml
openapi-type: arm
tag: package-2017-10
```

### Tag: package-2017-10

These settings apply only when `--tag=package-2017-10` is specified on the command line.

```yaml $(tag) == 'package-2017-10'
input-file:
- Microsoft.Cdn/stable/2017-10-12/cdn.json
```

### Tag: package-2017-04

These settings apply only when `--tag=package-2017-04` is specified on the command line.

```yaml $(tag) == 'package-2017-04'
input-file:
- Microsoft.Cdn/stable/2017-04-02/cdn.json
```
";
