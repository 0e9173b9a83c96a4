//! Tests for step rendering.

use super::*;

fn sample() -> DeployParams {
    DeployParams::new(
        "us-east-2",
        "123456789012",
        "myFn",
        "myRepo",
        "latest",
        "",
        "lambda-role",
    )
}

const EXPECTED_TEXT: &str = "
# Generated Commands

Authenticate Docker with ECR:
aws ecr get-login-password --region us-east-2 | docker login --username AWS --password-stdin 123456789012.dkr.ecr.us-east-2.amazonaws.com

Build the Docker image:
docker build -t myRepo:latest .

Tag the Docker image:
docker tag myRepo:latest 123456789012.dkr.ecr.us-east-2.amazonaws.com/myRepo:latest

Push the Docker image to ECR:
aws ecr describe-repositories --repository-names myRepo --region us-east-2 || aws ecr create-repository --repository-name myRepo --region us-east-2
docker push 123456789012.dkr.ecr.us-east-2.amazonaws.com/myRepo:latest

Create or update the Lambda function:
aws lambda create-function --function-name myFn \\
  --package-type Image \\
  --code ImageUri=123456789012.dkr.ecr.us-east-2.amazonaws.com/myRepo:latest \\
  --role arn:aws:iam::123456789012:role/lambda-role --region us-east-2 || \\
aws lambda update-function-code --function-name myFn \\
  --image-uri 123456789012.dkr.ecr.us-east-2.amazonaws.com/myRepo:latest --region us-east-2

Create Lambda Function URL:
aws lambda create-function-url-config --function-name myFn --auth-type NONE --region us-east-2

Whitelist the Function URL for public access:
aws lambda add-permission --function-name myFn \\
  --action lambda:InvokeFunctionUrl \\
  --principal '*' \\
  --statement-id FunctionUrlAllowPublicAccess \\
  --function-url-auth-type NONE --region us-east-2

Retrieve the Function URL:
aws lambda get-function-url-config --function-name myFn --query 'FunctionUrl' --output text --region us-east-2

To trigger the Lambda function locally, use:
  curl -X POST $(aws lambda get-function-url-config --function-name myFn --query 'FunctionUrl' --output text --region us-east-2)
";

#[test]
fn full_text_output_matches_layout() {
    let steps = render_steps(&sample(), RenderOptions::default()).unwrap();
    assert_eq!(render_text(&steps), EXPECTED_TEXT);
}

#[test]
fn steps_appear_in_fixed_order() {
    let steps = render_steps(&sample(), RenderOptions::default()).unwrap();
    let titles: Vec<&str> = steps.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Authenticate Docker with ECR",
            "Build the Docker image",
            "Tag the Docker image",
            "Push the Docker image to ECR",
            "Create or update the Lambda function",
            "Create Lambda Function URL",
            "Whitelist the Function URL for public access",
            "Retrieve the Function URL",
        ]
    );

    let text = render_text(&steps);
    let mut last = 0;
    for title in titles {
        let at = text.find(title).unwrap();
        assert!(at >= last, "{title} out of order");
        last = at;
    }
}

#[test]
fn rendering_is_idempotent() {
    let a = render_text(&render_steps(&sample(), RenderOptions::default()).unwrap());
    let b = render_text(&render_steps(&sample(), RenderOptions::default()).unwrap());
    assert_eq!(a, b);
}

#[test]
fn tag_command_for_worked_example() {
    let steps = render_steps(&sample(), RenderOptions::default()).unwrap();
    assert_eq!(
        steps[2].command,
        "docker tag myRepo:latest 123456789012.dkr.ecr.us-east-2.amazonaws.com/myRepo:latest"
    );
    assert!(
        steps[4]
            .command
            .contains("--role arn:aws:iam::123456789012:role/lambda-role ")
    );
}

#[test]
fn empty_context_renders_dot() {
    let steps = render_steps(&sample(), RenderOptions::default()).unwrap();
    assert_eq!(steps[1].command, "docker build -t myRepo:latest .");
}

#[test]
fn non_empty_context_renders_verbatim() {
    let params = DeployParams::new("r", "a", "f", "repo", "tag", "./services/api", "n");
    let steps = render_steps(&params, RenderOptions::default()).unwrap();
    assert_eq!(steps[1].command, "docker build -t repo:tag ./services/api");
}

#[test]
fn whitespace_context_renders_verbatim() {
    let params = DeployParams::new("r", "a", "f", "repo", "tag", "   ", "n");
    let steps = render_steps(&params, RenderOptions::default()).unwrap();
    assert_eq!(steps[1].command, "docker build -t repo:tag    ");
}

#[test]
fn empty_account_id_is_not_rejected() {
    let params = DeployParams::new("us-east-2", "", "f", "p", "t", "", "lambda-role");
    let steps = render_steps(&params, RenderOptions::default()).unwrap();
    assert!(steps[4].command.contains("--role arn:aws:iam:::role/lambda-role "));
}

#[test]
fn no_placeholders_remain() {
    let steps = render_steps(&sample(), RenderOptions::default()).unwrap();
    let text = render_text(&steps);
    assert!(!text.contains('{'));
    assert!(!text.contains('}'));
}

#[test]
fn every_template_renders() {
    // All placeholders in the table resolve against the variable set.
    let variables = template_vars(&sample());
    for step in STEPS.iter() {
        render_template(step.command, &variables).unwrap();
        if let Some(note) = step.note {
            render_template(note, &variables).unwrap();
        }
    }
}

#[test]
fn only_last_step_has_a_note() {
    let steps = render_steps(&sample(), RenderOptions::default()).unwrap();
    let (last, rest) = steps.split_last().unwrap();
    assert!(rest.iter().all(|s| s.note.is_none()));

    let note = last.note.as_deref().unwrap();
    assert!(note.starts_with("To trigger the Lambda function locally, use:\n"));
    assert!(note.contains(&format!("curl -X POST $({})", last.command)));
}

#[test]
fn create_falls_back_to_update_with_same_image() {
    let steps = render_steps(&sample(), RenderOptions::default()).unwrap();
    let (create, update) = steps[4].command.split_once("|| \\\n").unwrap();
    let image = "123456789012.dkr.ecr.us-east-2.amazonaws.com/myRepo:latest";
    assert!(create.contains(&format!("--code ImageUri={image}")));
    assert!(update.starts_with("aws lambda update-function-code"));
    assert!(update.contains(&format!("--image-uri {image}")));
}

#[test]
fn shell_metacharacters_are_not_escaped_by_default() {
    let params = DeployParams::new("r", "a", "fn; echo hi", "p", "t", "", "n");
    let steps = render_steps(&params, RenderOptions::default()).unwrap();
    assert!(steps[5].command.contains("--function-name fn; echo hi --auth-type"));
}

#[test]
fn quote_values_option_quotes_operator_input() {
    let params = DeployParams::new("us-east-2", "1", "my fn", "repo", "v1", "my dir", "role");
    let options = RenderOptions { quote_values: true };
    let steps = render_steps(&params, options).unwrap();
    assert_eq!(steps[1].command, "docker build -t repo:v1 'my dir'");
    assert!(steps[5].command.contains("--function-name 'my fn' "));
}

#[test]
fn json_output_lists_all_steps() {
    let steps = render_steps(&sample(), RenderOptions::default()).unwrap();
    let json = render_json(&steps).unwrap();
    assert!(json.ends_with('\n'));

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 8);
    assert_eq!(items[0]["title"], "Authenticate Docker with ECR");
    assert!(items[0].get("note").is_none());
    assert!(items[7]["note"].as_str().unwrap().contains("curl -X POST"));
}
