//! The fixed command templates, in output order.

/// One block of generated output before rendering.
#[derive(Debug, Clone, Copy)]
pub struct StepTemplate {
    pub title: &'static str,
    pub command: &'static str,
    pub note: Option<&'static str>,
}

pub const STEPS: [StepTemplate; 8] = [
    StepTemplate {
        title: "Authenticate Docker with ECR",
        command: "aws ecr get-login-password --region {region} | docker login --username AWS --password-stdin {registry}",
        note: None,
    },
    StepTemplate {
        title: "Build the Docker image",
        command: "docker build -t {local_image} {dockerfile_path}",
        note: None,
    },
    StepTemplate {
        title: "Tag the Docker image",
        command: "docker tag {local_image} {image_uri}",
        note: None,
    },
    StepTemplate {
        title: "Push the Docker image to ECR",
        command: "aws ecr describe-repositories --repository-names {repo_name} --region {region} || aws ecr create-repository --repository-name {repo_name} --region {region}\n\
docker push {image_uri}",
        note: None,
    },
    StepTemplate {
        title: "Create or update the Lambda function",
        command: "aws lambda create-function --function-name {function_name} \\\n  \
--package-type Image \\\n  \
--code ImageUri={image_uri} \\\n  \
--role {role_arn} --region {region} || \\\n\
aws lambda update-function-code --function-name {function_name} \\\n  \
--image-uri {image_uri} --region {region}",
        note: None,
    },
    StepTemplate {
        title: "Create Lambda Function URL",
        command: "aws lambda create-function-url-config --function-name {function_name} --auth-type NONE --region {region}",
        note: None,
    },
    StepTemplate {
        title: "Whitelist the Function URL for public access",
        command: "aws lambda add-permission --function-name {function_name} \\\n  \
--action lambda:InvokeFunctionUrl \\\n  \
--principal '*' \\\n  \
--statement-id FunctionUrlAllowPublicAccess \\\n  \
--function-url-auth-type NONE --region {region}",
        note: None,
    },
    StepTemplate {
        title: "Retrieve the Function URL",
        command: "aws lambda get-function-url-config --function-name {function_name} --query 'FunctionUrl' --output text --region {region}",
        note: Some(
            "To trigger the Lambda function locally, use:\n  \
curl -X POST $(aws lambda get-function-url-config --function-name {function_name} --query 'FunctionUrl' --output text --region {region})",
        ),
    },
];
