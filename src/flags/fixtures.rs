/// Help-text samples pinned from `helm template --help` and `kubeconform -h`.
pub const HELM_TEMPLATE_HELP: &str = "
Render chart templates locally and display the output.

Usage:
    helm template [NAME] [CHART] [flags]

Flags:
    -h, --help             help for template
    --kube-version string  Kubernetes version
    --output-dir string    writes the executed templates in output-dir
    --release-name         use release name in the output-dir path
    --insecure-skip-tls-verify  skip tls certificate checks for the chart download
    --verify               verify the package before using it
    --set stringArray      set values on the command line
    -f, --values strings   specify values in a YAML file or a URL

Global Flags:
    --burst-limit int       client-side default throttling limit
    --debug                 enable verbose output
    -n, --namespace string  namespace scope for this request
";

pub const KUBECONFORM_HELP: &str = "
Usage: kubeconform [OPTION]... [FILE OR FOLDER]...

    -h  show help information
    -debug
        print debug information
    -ignore-filename-pattern value
        regular expression specifying paths to ignore (can be specified multiple times)
    -insecure-skip-tls-verify
        disable verification of the server's SSL certificate
    -kubernetes-version string
        version of Kubernetes to validate against
    -n int
        number of goroutines to run concurrently
    -reject string
        comma-separated list of kinds or GVKs to reject
    -schema-location value
        override schemas location search path (can be specified multiple times)
    -strict
        disallow additional properties not in schema or duplicated keys
    -v  show version information
";
